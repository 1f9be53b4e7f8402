//! Input module (engine-facing).
//!
//! Turns what a player types into [`crate::types::BowlAction`]s, independent of
//! any UI framework:
//!
//! - [`map`]: `crossterm` key events from the interactive terminal
//! - [`notation`]: scoresheet tokens from the command line (`X`, `7/`, `9-`, `10`)

pub mod map;
pub mod notation;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
pub use notation::{parse_token, parse_tokens, TokenActions};
