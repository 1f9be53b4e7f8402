use arrayvec::ArrayVec;
use serde::Serialize;

use crate::frame::FrameKind;
use crate::types::{FINAL_FRAME_ROLLS, FRAME_COUNT, PIN_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FrameSnapshot {
    /// 1-based frame number
    pub number: u8,
    pub kind: FrameKind,
    pub rolls: ArrayVec<u8, FINAL_FRAME_ROLLS>,
    /// Scoresheet marks, one per roll
    pub marks: ArrayVec<char, FINAL_FRAME_ROLLS>,
    pub closed: bool,
    /// Score as of the end of this frame, once resolved
    pub cumulative: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub frames: ArrayVec<FrameSnapshot, FRAME_COUNT>,
    pub score: u32,
    /// 1-based number of the frame the next ball goes into
    pub current_frame: u8,
    pub pins_standing: u8,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Frames that will take no more balls
    pub fn closed_frames(&self) -> impl Iterator<Item = &FrameSnapshot> {
        self.frames.iter().filter(|f| f.closed)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            frames: ArrayVec::new(),
            score: 0,
            current_frame: 1,
            pins_standing: PIN_COUNT,
            game_over: false,
        }
    }
}
