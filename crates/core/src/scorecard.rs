//! Scorecard module - plain-text rendering of a game snapshot
//!
//! Two lines, one cell per closed frame:
//!
//! ```text
//! |X|7,/|9,0|
//! | 20| 39| 48|
//! ```
//!
//! Line 1 holds the marks of each frame, comma-separated. Line 2 holds the
//! cumulative score right-aligned in a cell of [`SCORE_CELL_WIDTH`], blank
//! while the frame is waiting on bonus balls.

use std::fmt::Write;

use crate::snapshot::GameSnapshot;
use crate::types::SCORE_CELL_WIDTH;

/// Render the two-line scoreboard for a snapshot.
pub fn render_scorecard(snap: &GameSnapshot) -> String {
    let mut out = String::with_capacity(128);
    render_scorecard_into(snap, &mut out);
    out
}

/// Render into an existing buffer, replacing its contents.
pub fn render_scorecard_into(snap: &GameSnapshot, out: &mut String) {
    out.clear();

    out.push('|');
    for frame in snap.closed_frames() {
        for (i, mark) in frame.marks.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push(*mark);
        }
        out.push('|');
    }

    out.push('\n');

    out.push('|');
    for frame in snap.closed_frames() {
        // Writing into a String cannot fail.
        let _ = match frame.cumulative {
            Some(total) => write!(out, "{:>width$}", total, width = SCORE_CELL_WIDTH),
            None => write!(out, "{:width$}", "", width = SCORE_CELL_WIDTH),
        };
        out.push('|');
    }
}
