//! Scoresheet notation parsing.
//!
//! A token is a whole pin count, an action word (`strike`, `spare`), or a
//! group of up to three marks written the way a scoresheet shows one frame:
//! `X`, `7/`, `9-`, `X81`, `XX5`.
//!
//! A token made only of digits is always one ball, so `11` is a single roll of
//! eleven pins and is rejected when bowled. Digits are split into separate
//! balls only inside a group that also carries an `X`, `/` or `-` mark.

use arrayvec::ArrayVec;

use crate::types::{BowlAction, RollMark, FINAL_FRAME_ROLLS};

/// Actions produced by one token
pub type TokenActions = ArrayVec<BowlAction, FINAL_FRAME_ROLLS>;

/// Parse one token.
///
/// Returns `None` for empty tokens, unknown characters, pin counts that do not
/// fit in a `u8` and groups longer than a final frame. Whether the balls are
/// legal is decided when they are bowled.
pub fn parse_token(token: &str) -> Option<TokenActions> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let mut actions = TokenActions::new();
    if token.bytes().all(|b| b.is_ascii_digit()) {
        let pins = token.parse::<u8>().ok()?;
        actions.push(BowlAction::Roll(pins));
        return Some(actions);
    }
    if let Some(action @ (BowlAction::Strike | BowlAction::Spare)) = BowlAction::from_str(token) {
        actions.push(action);
        return Some(actions);
    }

    for c in token.chars() {
        let mark = RollMark::from_char(c)?;
        actions.try_push(mark.to_action()).ok()?;
    }
    Some(actions)
}

/// Parse a sequence of tokens, stopping at the first one that does not parse.
///
/// The error carries the offending token.
pub fn parse_tokens<'a, I>(tokens: I) -> Result<Vec<BowlAction>, &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for token in tokens {
        let actions = parse_token(token).ok_or(token)?;
        out.extend(actions);
    }
    Ok(out)
}
