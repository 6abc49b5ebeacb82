//! Collaborator interface between the game core and whatever collects input
//! and shows output.
//!
//! Implementations return already validated values. The core only checks
//! them again where a bad value would break an invariant.

use crate::core::Result;
use crate::rules::RoundOutcome;
use crate::scoreboard::ScoreEntry;

use super::state::SessionSignal;

/// Something that happened and may be shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent<'a> {
    SessionStarted {
        player_name: &'a str,
        round_count: u32,
        balance: i64,
    },
    RoundResolved {
        round: u32,
        round_count: u32,
        outcome: &'a RoundOutcome,
        balance: i64,
    },
    Bankrupt {
        round: u32,
    },
    QuitEarly {
        round: u32,
        balance: i64,
    },
    Completed {
        balance: i64,
        /// 1-based leaderboard placement, if the score made the list.
        rank: Option<usize>,
    },
    LeaderboardSnapshot {
        round_count: u32,
        entries: &'a [ScoreEntry],
    },
}

/// Supplies player input and renders events.
pub trait Prompter {
    /// Non-blank name of letters and spaces, at most `max_len` chars.
    fn request_name(&mut self, max_len: usize) -> Result<String>;

    /// Round count in `1..=max`.
    fn request_round_count(&mut self, max: u32) -> Result<u32>;

    /// Bet in `1..=balance`.
    fn request_bet(&mut self, balance: i64) -> Result<i64>;

    fn request_continue_or_quit(&mut self) -> Result<SessionSignal>;

    fn request_play_again(&mut self) -> Result<bool>;

    fn display(&mut self, event: &GameEvent<'_>) -> Result<()>;
}
