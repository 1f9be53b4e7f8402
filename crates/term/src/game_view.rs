//! GameView: maps a `core::GameSnapshot` into text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{render_scorecard_into, GameSnapshot};

/// Rendered lines, top to bottom.
pub type ViewLines = Vec<String>;

const TITLE: &str = "TEN-PIN BOWLING";
const HELP: &str = "0-9 bowl  x strike  / spare  - miss  r restart  q quit";

/// A lightweight text renderer for the scoreboard screen.
pub struct GameView {
    show_help: bool,
    /// Lines are cut to this many characters (0 = no limit).
    max_width: usize,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            show_help: true,
            max_width: 0,
        }
    }
}

impl GameView {
    pub fn new(show_help: bool) -> Self {
        Self {
            show_help,
            max_width: 0,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn set_max_width(&mut self, max_width: usize) {
        self.max_width = max_width;
    }

    /// Render the screen into an existing line buffer.
    ///
    /// `status` is a one-line message shown under the score, typically the
    /// reason the last key was rejected.
    pub fn render_into(&self, snap: &GameSnapshot, status: Option<&str>, out: &mut ViewLines) {
        out.clear();
        out.push(TITLE.to_string());
        out.push(String::new());

        let mut card = String::new();
        render_scorecard_into(snap, &mut card);
        out.extend(card.lines().map(str::to_string));
        out.push(String::new());

        if snap.game_over {
            out.push("GAME OVER".to_string());
        } else {
            let ball = snap
                .frames
                .last()
                .map(|f| f.rolls.len() + 1)
                .unwrap_or(1);
            out.push(format!(
                "Frame {}  Ball {}  Pins standing {}",
                snap.current_frame, ball, snap.pins_standing
            ));
        }
        out.push(format!("Score: {}", snap.score));

        if let Some(msg) = status {
            out.push(msg.to_string());
        }

        if self.show_help {
            out.push(String::new());
            out.push(HELP.to_string());
        }

        if self.max_width > 0 {
            for line in out.iter_mut() {
                if let Some((cut, _)) = line.char_indices().nth(self.max_width) {
                    line.truncate(cut);
                }
            }
        }
    }

    pub fn render(&self, snap: &GameSnapshot, status: Option<&str>) -> ViewLines {
        let mut out = ViewLines::new();
        self.render_into(snap, status, &mut out);
        out
    }
}
