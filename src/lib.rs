//! Ten-pin bowling scorekeeper (workspace facade crate).
//!
//! Re-exports the workspace crates under stable `tui_bowling::{core,input,term,types}`
//! paths, and holds the pieces the `tui-bowling` binary needs on top of them:
//! command-line parsing and the optional roll log.

pub mod cli;
pub mod roll_log;

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;
