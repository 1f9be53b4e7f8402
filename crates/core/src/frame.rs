//! Frame module - one turn of one to three balls
//!
//! Frames 1-9 and frame 10 share one type. The [`FrameKind`] tag decides how
//! many ball slots the frame has and when it is full:
//!
//! - **Regular**: full after two balls, or immediately after a strike
//! - **Final**: full after two balls that leave pins standing, otherwise after
//!   the third (bonus) ball
//!
//! Strike and spare are always judged on the first two balls, so a bonus ball
//! never changes how the frame is classified.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::BowlError;
use crate::types::{RollMark, FINAL_FRAME_ROLLS, PIN_COUNT, REGULAR_FRAME_ROLLS};

/// Which rules a frame follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Regular,
    Final,
}

impl FrameKind {
    /// Maximum number of balls the frame can hold
    pub fn capacity(&self) -> usize {
        match self {
            FrameKind::Regular => REGULAR_FRAME_ROLLS,
            FrameKind::Final => FINAL_FRAME_ROLLS,
        }
    }
}

/// Pins left for the next ball, and whether that ball opens a fresh rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rack {
    standing: u8,
    fresh: bool,
}

impl Rack {
    const FULL: Rack = Rack {
        standing: PIN_COUNT,
        fresh: true,
    };

    /// Mark for a ball knocking down `pins` from this rack.
    fn mark(&self, pins: u8) -> RollMark {
        if self.fresh && pins == PIN_COUNT {
            RollMark::Strike
        } else if !self.fresh && pins == self.standing {
            RollMark::Spare
        } else {
            RollMark::Pins(pins)
        }
    }

    /// Rack after a ball knocking down `pins`.
    ///
    /// A strike or the second ball of a rack resets to a full rack.
    fn after(&self, pins: u8) -> Rack {
        if !self.fresh || pins >= self.standing {
            Rack::FULL
        } else {
            Rack {
                standing: self.standing - pins,
                fresh: false,
            }
        }
    }
}

/// One frame of a game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    kind: FrameKind,
    rolls: ArrayVec<u8, FINAL_FRAME_ROLLS>,
}

impl Frame {
    /// Create an empty frame of the given kind
    pub fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            rolls: ArrayVec::new(),
        }
    }

    /// Create an empty frame for frames 1-9
    pub fn regular() -> Self {
        Self::new(FrameKind::Regular)
    }

    /// Create an empty tenth frame
    pub fn final_frame() -> Self {
        Self::new(FrameKind::Final)
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn is_final(&self) -> bool {
        self.kind == FrameKind::Final
    }

    /// Balls recorded so far, in order
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Append a ball to the frame.
    ///
    /// Returns `false` and records nothing once the frame is full. Pin counts
    /// are validated by the scoreboard before they reach the frame.
    pub fn record_roll(&mut self, pins: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.rolls.try_push(pins).is_ok()
    }

    pub fn is_full(&self) -> bool {
        match self.kind {
            FrameKind::Regular => self.is_strike() || self.rolls.len() == self.kind.capacity(),
            FrameKind::Final => match self.rolls.as_slice() {
                [first, second] => first + second < PIN_COUNT,
                rolls => rolls.len() == self.kind.capacity(),
            },
        }
    }

    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PIN_COUNT)
    }

    pub fn is_spare(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => *first != PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Neither strike nor spare, and no more balls to come
    pub fn is_open(&self) -> bool {
        self.is_full() && !self.is_strike() && !self.is_spare()
    }

    /// Sum of every ball recorded in this frame
    pub fn total_pins(&self) -> u32 {
        self.rolls.iter().map(|&pins| u32::from(pins)).sum()
    }

    pub fn first_roll(&self) -> Result<u8, BowlError> {
        self.roll(0)
    }

    /// Ball `index` (0-based) of this frame
    pub fn roll(&self, index: usize) -> Result<u8, BowlError> {
        self.rolls
            .get(index)
            .copied()
            .ok_or(BowlError::RollNotRecorded { index })
    }

    /// Pins standing for the next ball, 0 once the frame is full
    pub fn pins_standing(&self) -> u8 {
        if self.is_full() {
            return 0;
        }
        self.rack().standing
    }

    /// Whether the next ball is the first ball at a full rack
    pub fn is_fresh_rack(&self) -> bool {
        !self.is_full() && self.rack().fresh
    }

    /// Scoresheet marks for the balls recorded so far
    pub fn marks(&self) -> ArrayVec<RollMark, FINAL_FRAME_ROLLS> {
        let mut rack = Rack::FULL;
        let mut marks = ArrayVec::new();
        for &pins in &self.rolls {
            marks.push(rack.mark(pins));
            rack = rack.after(pins);
        }
        marks
    }

    fn rack(&self) -> Rack {
        self.rolls
            .iter()
            .fold(Rack::FULL, |rack, &pins| rack.after(pins))
    }
}
