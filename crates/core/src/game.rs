//! Game module - the facade callers bowl against
//!
//! Validates raw input before it reaches the [`Scoreboard`], and exposes the
//! score and the rendered scoreboard as pure reads.

use arrayvec::ArrayVec;

use crate::error::{BowlError, InvalidRollReason};
use crate::frame::Frame;
use crate::scoreboard::Scoreboard;
use crate::scorecard::render_scorecard;
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{BowlAction, FINAL_FRAME_ROLLS, PIN_COUNT};

/// One single-player game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    scoreboard: Scoreboard,
    rolls_bowled: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bowl one ball.
    ///
    /// Negative pins are always rejected, then rolls after the final frame,
    /// then pin counts above what is standing. A rejected ball leaves the game
    /// untouched. Returns `self` so balls can be chained with `?`.
    pub fn bowl(&mut self, pins: i32) -> Result<&mut Self, BowlError> {
        if pins < 0 {
            return Err(BowlError::invalid(pins, InvalidRollReason::Negative));
        }
        if self.is_game_over() {
            return Err(BowlError::GameOver);
        }

        let standing = self.pins_standing();
        let pins = u8::try_from(pins)
            .map_err(|_| BowlError::invalid(pins, InvalidRollReason::ExceedsStanding { standing }))?;

        self.scoreboard.update(pins)?;
        self.rolls_bowled += 1;
        Ok(self)
    }

    /// Apply a scoresheet-level action.
    ///
    /// `Strike` and `Spare` bowl whatever is standing, but only when that is
    /// what the mark means for the current rack.
    pub fn apply_action(&mut self, action: BowlAction) -> Result<(), BowlError> {
        match action {
            BowlAction::Roll(pins) => {
                self.bowl(i32::from(pins))?;
            }
            BowlAction::Strike => {
                if self.is_game_over() {
                    return Err(BowlError::GameOver);
                }
                if !self.current_frame().is_fresh_rack() {
                    return Err(BowlError::invalid(
                        i32::from(PIN_COUNT),
                        InvalidRollReason::RackNotFresh,
                    ));
                }
                self.bowl(i32::from(PIN_COUNT))?;
            }
            BowlAction::Spare => {
                if self.is_game_over() {
                    return Err(BowlError::GameOver);
                }
                let standing = self.pins_standing();
                if self.current_frame().is_fresh_rack() {
                    return Err(BowlError::invalid(
                        i32::from(standing),
                        InvalidRollReason::NoSpareToConvert,
                    ));
                }
                self.bowl(i32::from(standing))?;
            }
            BowlAction::Restart => {
                *self = Game::new();
            }
        }
        Ok(())
    }

    /// Resolved score so far; pending strike and spare bonuses are not included
    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    /// Two-line text scoreboard of the closed frames
    pub fn render_scoreboard(&self) -> String {
        render_scorecard(&self.snapshot())
    }

    pub fn is_game_over(&self) -> bool {
        self.scoreboard.is_game_over()
    }

    pub fn pins_standing(&self) -> u8 {
        self.scoreboard.pins_standing()
    }

    /// 1-based number of the current frame
    pub fn current_frame_number(&self) -> usize {
        self.scoreboard.current_index() + 1
    }

    pub fn current_frame(&self) -> &Frame {
        self.scoreboard.current_frame()
    }

    pub fn frames(&self) -> &[Frame] {
        self.scoreboard.frames()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Number of balls accepted so far
    pub fn rolls_bowled(&self) -> u32 {
        self.rolls_bowled
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.frames.clear();
        for (index, frame) in self.scoreboard.frames().iter().enumerate() {
            let rolls: ArrayVec<u8, FINAL_FRAME_ROLLS> = frame.rolls().iter().copied().collect();
            let marks = frame.marks().iter().map(|m| m.as_char()).collect();
            out.frames.push(FrameSnapshot {
                number: (index + 1) as u8,
                kind: frame.kind(),
                rolls,
                marks,
                closed: frame.is_full(),
                cumulative: self.scoreboard.cumulative(index),
            });
        }
        out.score = self.score();
        out.current_frame = self.current_frame_number() as u8;
        out.pins_standing = self.pins_standing();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
