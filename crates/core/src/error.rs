//! Errors reported to callers of `Game::bowl` and the frame queries.

use thiserror::Error;

/// Why a roll was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRollReason {
    #[error("cannot knock down negative pins")]
    Negative,
    #[error("only {standing} pins are standing")]
    ExceedsStanding { standing: u8 },
    #[error("a spare needs a first ball in the rack")]
    NoSpareToConvert,
    #[error("a strike needs a full rack")]
    RackNotFresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BowlError {
    #[error("invalid roll of {pins}: {reason}")]
    InvalidRoll {
        pins: i32,
        reason: InvalidRollReason,
    },
    #[error("the game is over, no more rolls are accepted")]
    GameOver,
    #[error("roll {index} has not been recorded")]
    RollNotRecorded { index: usize },
}

impl BowlError {
    pub fn invalid(pins: i32, reason: InvalidRollReason) -> Self {
        BowlError::InvalidRoll { pins, reason }
    }

    pub fn is_invalid_roll(&self) -> bool {
        matches!(self, BowlError::InvalidRoll { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, BowlError::GameOver)
    }
}
