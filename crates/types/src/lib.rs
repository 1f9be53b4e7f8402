//! Core types module - shared constants and small value types
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable in
//! any context (scoring core, key mapping, terminal rendering).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Frames in one game (9 regular + 1 final) |
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `REGULAR_FRAME_ROLLS` | 2 | Ball slots in frames 1-9 |
//! | `FINAL_FRAME_ROLLS` | 3 | Ball slots in frame 10 (bonus ball included) |
//! | `MAX_SCORE` | 300 | Score of a perfect game |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{BowlAction, RollMark, FRAME_COUNT, PIN_COUNT};
//!
//! // Parse a scoresheet mark (case-insensitive)
//! assert_eq!(RollMark::from_char('x'), Some(RollMark::Strike));
//! assert_eq!(RollMark::from_char('7'), Some(RollMark::Pins(7)));
//!
//! // Parse an action name
//! assert_eq!(BowlAction::from_str("strike"), Some(BowlAction::Strike));
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//! ```

/// Number of frames in a game
pub const FRAME_COUNT: usize = 10;

/// Pins in a full rack
pub const PIN_COUNT: u8 = 10;

/// Ball slots in a regular frame (frames 1-9)
pub const REGULAR_FRAME_ROLLS: usize = 2;

/// Ball slots in the final frame (two balls plus one bonus ball)
pub const FINAL_FRAME_ROLLS: usize = 3;

/// Score of a perfect game (twelve strikes)
pub const MAX_SCORE: u32 = 300;

/// Width of one cumulative-score cell on the rendered scoreboard
pub const SCORE_CELL_WIDTH: usize = 3;


/// A single ball as written on a scoresheet
///
/// - **Strike**: `X`, all ten pins on the first ball of a rack
/// - **Spare**: `/`, the ball that clears what the previous ball left
/// - **Miss**: `-`, no pins down
/// - **Pins(n)**: a plain digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollMark {
    Strike,
    Spare,
    Miss,
    Pins(u8),
}

impl RollMark {
    /// Parse a scoresheet mark (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::RollMark;
    ///
    /// assert_eq!(RollMark::from_char('X'), Some(RollMark::Strike));
    /// assert_eq!(RollMark::from_char('/'), Some(RollMark::Spare));
    /// assert_eq!(RollMark::from_char('-'), Some(RollMark::Miss));
    /// assert_eq!(RollMark::from_char('0'), Some(RollMark::Pins(0)));
    /// assert_eq!(RollMark::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(RollMark::Strike),
            '/' => Some(RollMark::Spare),
            '-' => Some(RollMark::Miss),
            '0'..='9' => c.to_digit(10).map(|d| RollMark::Pins(d as u8)),
            _ => None,
        }
    }

    /// Character used when rendering the scoreboard
    ///
    /// Misses render as `0`, matching the plain-digit scoreboard layout.
    pub fn as_char(&self) -> char {
        match self {
            RollMark::Strike => 'X',
            RollMark::Spare => '/',
            RollMark::Miss => '0',
            RollMark::Pins(n) => char::from_digit(u32::from(*n), 10).unwrap_or('?'),
        }
    }

    /// Convert to the action that bowls this mark
    pub fn to_action(&self) -> BowlAction {
        match self {
            RollMark::Strike => BowlAction::Strike,
            RollMark::Spare => BowlAction::Spare,
            RollMark::Miss => BowlAction::Roll(0),
            RollMark::Pins(n) => BowlAction::Roll(*n),
        }
    }
}

/// Actions that can be applied to a game
///
/// These actions are produced by both the key mapping and the scoresheet
/// parser. `Strike` and `Spare` are resolved against the pins standing at the
/// time they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BowlAction {
    /// Knock down an explicit number of pins
    Roll(u8),
    /// Knock down the whole rack on a fresh rack
    Strike,
    /// Knock down whatever the previous ball left standing
    Spare,
    /// Throw the current game away and start a new one
    Restart,
}

impl BowlAction {
    /// Parse action from string
    ///
    /// Accepts the action names (case-insensitive) or a pin count.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::BowlAction;
    ///
    /// assert_eq!(BowlAction::from_str("spare"), Some(BowlAction::Spare));
    /// assert_eq!(BowlAction::from_str("Restart"), Some(BowlAction::Restart));
    /// assert_eq!(BowlAction::from_str("7"), Some(BowlAction::Roll(7)));
    /// assert_eq!(BowlAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" => Some(BowlAction::Strike),
            "spare" => Some(BowlAction::Spare),
            "restart" => Some(BowlAction::Restart),
            other => other.parse::<u8>().ok().map(BowlAction::Roll),
        }
    }

    /// Convert to a short string for status lines
    pub fn as_str(&self) -> &'static str {
        match self {
            BowlAction::Roll(_) => "roll",
            BowlAction::Strike => "strike",
            BowlAction::Spare => "spare",
            BowlAction::Restart => "restart",
        }
    }
}
