//! Roll log - optional JSON-lines record of every ball.
//!
//! One object per line:
//!
//! ```text
//! {"type":"roll","seq":1,"frame":1,"pins":10,"score":0,"game_over":false}
//! {"type":"rejected","seq":2,"action":"roll","pins":11,"error":"invalid roll of 11: only 10 pins are standing"}
//! {"type":"restart","seq":3}
//! ```
//!
//! Write failures switch the log off; they never affect the game.

use std::fs::{File, OpenOptions};
use std::io::Write;

use serde::Serialize;

use crate::core::{BowlError, Game};
use crate::types::BowlAction;

/// Roll log configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub path: Option<String>,
}

impl LogConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        if Self::is_disabled() {
            return Self { path: None };
        }

        let path = std::env::var("BOWLING_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self { path }
    }

    /// Check if the log is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("BOWLING_LOG_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    /// Prefer an explicit path (from `--log`) over the environment.
    pub fn with_path_override(mut self, path: Option<String>) -> Self {
        if path.is_some() {
            self.path = path;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollRecord {
    Roll {
        seq: u64,
        frame: usize,
        pins: u8,
        score: u32,
        game_over: bool,
    },
    Rejected {
        seq: u64,
        action: &'static str,
        pins: Option<i32>,
        error: String,
    },
    Restart {
        seq: u64,
    },
}

pub struct RollLog<W: Write> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl RollLog<File> {
    /// Open the configured log for appending.
    ///
    /// Without a path, or when the file cannot be opened, the log is disabled.
    pub fn open(config: &LogConfig) -> Self {
        let Some(path) = config.path.as_deref() else {
            return Self::disabled();
        };
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::to_writer(file),
            Err(e) => {
                eprintln!("[bowling] roll log disabled: cannot open {}: {}", path, e);
                Self::disabled()
            }
        }
    }
}

impl<W: Write> RollLog<W> {
    pub fn to_writer(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }

    /// Apply an action to the game and record the outcome.
    pub fn apply(&mut self, game: &mut Game, action: BowlAction) -> Result<(), BowlError> {
        match game.apply_action(action) {
            Ok(()) => {
                let record = match action {
                    BowlAction::Restart => RollRecord::Restart {
                        seq: self.next_seq(),
                    },
                    _ => {
                        let (frame, pins) = last_ball(game).unwrap_or((0, 0));
                        RollRecord::Roll {
                            seq: self.next_seq(),
                            frame,
                            pins,
                            score: game.score(),
                            game_over: game.is_game_over(),
                        }
                    }
                };
                self.record(&record);
                Ok(())
            }
            Err(err) => {
                let pins = match err {
                    BowlError::InvalidRoll { pins, .. } => Some(pins),
                    _ => None,
                };
                let record = RollRecord::Rejected {
                    seq: self.next_seq(),
                    action: action.as_str(),
                    pins,
                    error: err.to_string(),
                };
                self.record(&record);
                Err(err)
            }
        }
    }

    pub fn record(&mut self, record: &RollRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = out.write_all(&self.buf).and_then(|_| out.flush()) {
            eprintln!("[bowling] roll log disabled: {}", e);
            self.out = None;
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

/// 1-based frame number and pins of the most recent ball.
fn last_ball(game: &Game) -> Option<(usize, u8)> {
    game.frames()
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, f)| f.rolls().last().map(|&pins| (i + 1, pins)))
}
