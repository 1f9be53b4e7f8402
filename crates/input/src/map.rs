//! Key mapping from terminal events to bowling actions.

use crate::types::{BowlAction, RollMark};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to bowling actions.
///
/// Digits bowl that many pins, `x` is a strike, `/` a spare and `-` a miss.
/// Ten pins on a fresh rack is entered as `x`.
pub fn handle_key_event(key: KeyEvent) -> Option<BowlAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BowlAction::Restart),
        KeyCode::Char(c) => RollMark::from_char(c).map(|mark| mark.to_action()),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
