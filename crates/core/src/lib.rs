//! Core scoring module - pure, deterministic, and testable
//!
//! This module contains the bowling rules, the frame model and the
//! incremental scoring engine. It has **zero dependencies** on terminal
//! rendering or I/O.
//!
//! # Module Structure
//!
//! - [`frame`]: one frame of up to three balls, regular or final
//! - [`scoreboard`]: the ten-frame sequence and bonus resolution
//! - [`game`]: input validation and the caller-facing facade
//! - [`scorecard`]: two-line plain-text scoreboard rendering
//! - [`snapshot`]: serializable view of a game for renderers and logs
//! - [`error`]: errors reported by `bowl`
//!
//! # Scoring Rules
//!
//! - **Open frame**: the pins knocked down in the frame
//! - **Spare**: 10 plus the next ball
//! - **Strike**: 10 plus the next two balls, which may span two frames
//! - **Final frame**: a strike or spare earns bonus balls inside the frame
//!   itself, and the frame scores the sum of all its balls
//!
//! A frame is scored as soon as its bonus balls are known. Until then it adds
//! nothing to [`Game::score`].
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{BowlError, Game};
//!
//! let mut game = Game::new();
//! game.bowl(10)?.bowl(4)?.bowl(2)?;
//! assert_eq!(game.score(), 22);
//!
//! assert_eq!(game.render_scoreboard(), "|X|4,2|\n| 16| 22|");
//! # Ok::<(), BowlError>(())
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoreboard;
pub mod scorecard;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use error::{BowlError, InvalidRollReason};
pub use frame::{Frame, FrameKind};
pub use game::Game;
pub use scoreboard::{resolvable_contribution, Scoreboard};
pub use scorecard::{render_scorecard, render_scorecard_into};
pub use snapshot::{FrameSnapshot, GameSnapshot};
