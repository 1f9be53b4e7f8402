//! Terminal scoreboard module.
//!
//! A small rendering layer for interactive play. The view is pure: it turns a
//! [`core::GameSnapshot`] into plain text lines. The renderer owns the
//! terminal and only rewrites lines that changed since the last draw.

pub mod game_view;
pub mod renderer;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use game_view::{GameView, ViewLines};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
