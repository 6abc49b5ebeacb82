//! Input validation for the values a collaborator collects.
//!
//! Each parser takes the raw line the player typed and returns either the
//! value or the validation error whose message should be shown before
//! asking again.

use crate::core::{DiceError, Result};
use crate::scoreboard::format::{is_reserved_name, HEADER_KEYWORD};

use super::state::SessionSignal;

/// Trimmed name: non-blank, at most `max_len` chars, letters and spaces only.
///
/// The scoreboard header keyword `rounds` is refused as a name.
pub fn validate_name(input: &str, max_len: usize) -> Result<String> {
    let name = input.trim();
    let valid = !name.is_empty()
        && name.chars().count() <= max_len
        && name.chars().all(|c| c.is_alphabetic() || c.is_whitespace());

    if !valid {
        return Err(DiceError::InvalidName { max: max_len });
    }
    if is_reserved_name(name) {
        return Err(DiceError::ReservedName { name: HEADER_KEYWORD });
    }
    Ok(name.to_string())
}

/// Round count in `1..=max`.
pub fn parse_round_count(input: &str, max: u32) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=max).contains(n))
        .ok_or(DiceError::InvalidRoundCount { max })
}

/// Bet in `1..=balance`.
pub fn parse_bet(input: &str, balance: i64) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (1..=balance).contains(n))
        .ok_or(DiceError::InvalidBet { balance })
}

/// `c`/`continue` or `q`/`quit`, case-insensitive.
pub fn parse_continue_choice(input: &str) -> Result<SessionSignal> {
    match input.trim().to_ascii_lowercase().as_str() {
        "c" | "continue" => Ok(SessionSignal::Continue),
        "q" | "quit" => Ok(SessionSignal::Quit),
        _ => Err(DiceError::InvalidChoice {
            expected: "'c' to continue or 'q' to quit",
        }),
    }
}

/// `y`/`yes` or `n`/`no`, case-insensitive.
pub fn parse_play_again(input: &str) -> Result<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(DiceError::InvalidChoice {
            expected: "'y' or 'n'",
        }),
    }
}
