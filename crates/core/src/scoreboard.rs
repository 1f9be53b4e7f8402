//! Scoreboard module - frame sequence and incremental scoring
//!
//! The scoreboard owns up to ten frames, indexed 0-9. The last frame is the
//! current one; every earlier frame is full.
//!
//! After each ball every frame without a score is offered to
//! [`resolvable_contribution`]. A frame's contribution is stored the first
//! time it can be computed and is never revisited:
//!
//! | Frame | Contribution | Lookahead |
//! |-------|--------------|-----------|
//! | Open | pins in the frame | none |
//! | Spare | 10 + next ball | 1 ball |
//! | Strike | 10 + next two balls | 2 balls, possibly across two frames |
//! | Final | pins in the frame (2 or 3 balls) | none |

use arrayvec::ArrayVec;

use crate::error::{BowlError, InvalidRollReason};
use crate::frame::{Frame, FrameKind};
use crate::types::{FRAME_COUNT, PIN_COUNT};

/// Points frame `index` is worth, if everything needed to score it is known.
///
/// Bonus balls are counted individually, wherever they were thrown. For a
/// strike followed by another strike the second bonus ball comes from the
/// frame after that, or from the second ball of the final frame.
pub fn resolvable_contribution(frames: &[Frame], index: usize) -> Option<u32> {
    let frame = frames.get(index)?;
    if !frame.is_full() {
        return None;
    }
    if frame.is_final() {
        return Some(frame.total_pins());
    }

    let bonus_balls = if frame.is_strike() {
        2
    } else if frame.is_spare() {
        1
    } else {
        return Some(frame.total_pins());
    };

    let mut bonus = 0u32;
    let mut seen = 0usize;
    for &pins in frames[index + 1..]
        .iter()
        .flat_map(|f| f.rolls())
        .take(bonus_balls)
    {
        bonus += u32::from(pins);
        seen += 1;
    }

    (seen == bonus_balls).then(|| u32::from(PIN_COUNT) + bonus)
}

/// All frames of one game plus the scores resolved so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    frames: ArrayVec<Frame, FRAME_COUNT>,
    contributions: [Option<u32>; FRAME_COUNT],
    total: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        let mut frames = ArrayVec::new();
        frames.push(Frame::regular());
        Self {
            frames,
            contributions: [None; FRAME_COUNT],
            total: 0,
        }
    }

    /// Apply one ball to the current frame.
    ///
    /// Nothing is mutated when the ball is rejected.
    pub fn update(&mut self, pins: u8) -> Result<(), BowlError> {
        if self.is_game_over() {
            return Err(BowlError::GameOver);
        }

        let standing = self.pins_standing();
        if pins > standing {
            return Err(BowlError::invalid(
                i32::from(pins),
                InvalidRollReason::ExceedsStanding { standing },
            ));
        }

        let index = self.current_index();
        if !self.frames[index].record_roll(pins) {
            // A full current frame only exists once the game is over.
            return Err(BowlError::GameOver);
        }

        self.resolve();

        if self.frames[index].is_full() && index + 1 < FRAME_COUNT {
            let kind = if index + 2 == FRAME_COUNT {
                FrameKind::Final
            } else {
                FrameKind::Regular
            };
            self.frames.push(Frame::new(kind));
        }

        Ok(())
    }

    /// Resolve every frame whose lookahead is now available.
    fn resolve(&mut self) {
        for index in 0..self.frames.len() {
            if self.contributions[index].is_some() {
                continue;
            }
            if let Some(points) = resolvable_contribution(&self.frames, index) {
                self.contributions[index] = Some(points);
                self.total += points;
            }
        }
    }

    /// Total of all resolved contributions
    pub fn score(&self) -> u32 {
        self.total
    }

    pub fn is_game_over(&self) -> bool {
        self.frames.len() == FRAME_COUNT
            && self.frames.last().map(Frame::is_full).unwrap_or(false)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame the next ball goes into (the final frame once the game is over)
    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_index()]
    }

    /// 0-based index of the current frame
    pub fn current_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Pins standing for the next ball, 0 once the game is over
    pub fn pins_standing(&self) -> u8 {
        self.current_frame().pins_standing()
    }

    /// Points frame `index` contributes, once resolved
    pub fn contribution(&self, index: usize) -> Option<u32> {
        self.contributions.get(index).copied().flatten()
    }

    /// Score as of the end of frame `index`.
    ///
    /// Only defined when that frame and every frame before it are resolved.
    pub fn cumulative(&self, index: usize) -> Option<u32> {
        if index >= FRAME_COUNT {
            return None;
        }
        self.contributions[..=index]
            .iter()
            .try_fold(0u32, |sum, points| points.map(|p| sum + p))
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rolls: &[u8]) -> Scoreboard {
        let mut sb = Scoreboard::new();
        for &pins in rolls {
            sb.update(pins).unwrap();
        }
        sb
    }

    #[test]
    fn test_new_scoreboard() {
        let sb = Scoreboard::new();
        assert_eq!(sb.frames().len(), 1);
        assert_eq!(sb.current_index(), 0);
        assert_eq!(sb.score(), 0);
        assert_eq!(sb.pins_standing(), 10);
        assert!(!sb.is_game_over());
        assert_eq!(sb.cumulative(0), None);
    }

    #[test]
    fn test_open_frame_resolves_when_full() {
        let sb = board(&[2]);
        assert_eq!(sb.score(), 0);
        assert_eq!(sb.contribution(0), None);

        let sb = board(&[2, 3]);
        assert_eq!(sb.score(), 5);
        assert_eq!(sb.contribution(0), Some(5));
        assert_eq!(sb.frames().len(), 2);
    }

    #[test]
    fn test_spare_waits_for_one_ball() {
        let sb = board(&[5, 5]);
        assert_eq!(sb.score(), 0);
        assert_eq!(sb.contribution(0), None);

        let sb = board(&[5, 5, 3]);
        assert_eq!(sb.contribution(0), Some(13));
        assert_eq!(sb.score(), 13);

        let sb = board(&[5, 5, 3, 2]);
        assert_eq!(sb.score(), 18);
        assert_eq!(sb.cumulative(1), Some(18));
    }

    #[test]
    fn test_spare_bonus_from_strike() {
        let sb = board(&[5, 5, 10]);
        assert_eq!(sb.contribution(0), Some(20));
        assert_eq!(sb.contribution(1), None);
        assert_eq!(sb.score(), 20);
    }

    #[test]
    fn test_strike_waits_for_two_balls() {
        let sb = board(&[10, 4]);
        assert_eq!(sb.score(), 0);

        let sb = board(&[10, 4, 2]);
        assert_eq!(sb.contribution(0), Some(16));
        assert_eq!(sb.contribution(1), Some(6));
        assert_eq!(sb.score(), 22);
    }

    #[test]
    fn test_double_strike_uses_individual_balls() {
        let sb = board(&[10, 10, 4]);
        assert_eq!(sb.contribution(0), Some(24));
        assert_eq!(sb.contribution(1), None);

        let sb = board(&[10, 10, 4, 2]);
        assert_eq!(sb.contribution(1), Some(16));
        assert_eq!(sb.contribution(2), Some(6));
        assert_eq!(sb.score(), 24 + 16 + 6);
    }

    #[test]
    fn test_turkey() {
        let sb = board(&[10, 10, 10]);
        assert_eq!(sb.contribution(0), Some(30));
        assert_eq!(sb.contribution(1), None);
        assert_eq!(sb.score(), 30);
        assert_eq!(sb.cumulative(0), Some(30));
        assert_eq!(sb.cumulative(1), None);
    }

    #[test]
    fn test_ninth_frame_strike_uses_final_frame_balls() {
        let mut rolls = vec![0u8; 16];
        rolls.extend_from_slice(&[10, 10, 10, 10]);
        let sb = board(&rolls);
        assert!(sb.is_game_over());
        assert_eq!(sb.contribution(8), Some(30));
        assert_eq!(sb.contribution(9), Some(30));
        assert_eq!(sb.score(), 60);
    }

    #[test]
    fn test_ninth_frame_spare_uses_final_frame_first_ball() {
        let mut rolls = vec![0u8; 16];
        rolls.extend_from_slice(&[5, 5, 7, 1]);
        let sb = board(&rolls);
        assert!(sb.is_game_over());
        assert_eq!(sb.contribution(8), Some(17));
        assert_eq!(sb.contribution(9), Some(8));
        assert_eq!(sb.score(), 25);
    }

    #[test]
    fn test_final_frame_is_created_after_ninth() {
        let sb = board(&[0; 18]);
        assert_eq!(sb.frames().len(), 10);
        assert!(sb.current_frame().is_final());
        assert!(sb.frames()[..9].iter().all(|f| !f.is_final()));
    }

    #[test]
    fn test_perfect_game() {
        let sb = board(&[10; 12]);
        assert!(sb.is_game_over());
        assert_eq!(sb.score(), crate::types::MAX_SCORE);
        for i in 0..FRAME_COUNT {
            assert_eq!(sb.cumulative(i), Some(30 * (i as u32 + 1)));
        }
    }

    #[test]
    fn test_game_over_rejects_roll() {
        let mut sb = board(&[0; 20]);
        assert!(sb.is_game_over());
        assert_eq!(sb.pins_standing(), 0);

        let before = sb.clone();
        assert_eq!(sb.update(0), Err(BowlError::GameOver));
        assert_eq!(sb, before);
    }

    #[test]
    fn test_too_many_pins_rejected_without_mutation() {
        let mut sb = board(&[7]);
        let before = sb.clone();

        let err = sb.update(4).unwrap_err();
        assert_eq!(
            err,
            BowlError::invalid(4, InvalidRollReason::ExceedsStanding { standing: 3 })
        );
        assert_eq!(sb, before);

        let mut sb = Scoreboard::new();
        assert!(sb.update(11).unwrap_err().is_invalid_roll());
        assert_eq!(sb.frames()[0].rolls().len(), 0);
    }

    #[test]
    fn test_final_frame_bonus_ball_limited_by_rack() {
        let mut rolls = vec![0u8; 18];
        rolls.extend_from_slice(&[10, 6]);
        let mut sb = board(&rolls);
        assert_eq!(sb.pins_standing(), 4);
        assert!(sb.update(5).unwrap_err().is_invalid_roll());
        sb.update(4).unwrap();
        assert_eq!(sb.score(), 20);
    }

    #[test]
    fn test_resolvable_contribution_is_pure() {
        let sb = board(&[10, 3]);
        assert_eq!(resolvable_contribution(sb.frames(), 0), None);
        assert_eq!(resolvable_contribution(sb.frames(), 1), None);
        assert_eq!(resolvable_contribution(sb.frames(), 5), None);

        let sb = board(&[10, 3, 4]);
        assert_eq!(resolvable_contribution(sb.frames(), 0), Some(17));
        assert_eq!(resolvable_contribution(sb.frames(), 0), Some(17));
        assert_eq!(resolvable_contribution(sb.frames(), 1), Some(7));
    }
}
