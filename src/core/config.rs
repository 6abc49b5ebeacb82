//! Game configuration.
//!
//! `GameConfig` holds the constants a session needs (starting balance,
//! round bounds, name length) plus the process-level settings used by the
//! binary (scoreboard location, RNG seed, pacing delay).
//!
//! The binary reads overrides from the environment:
//! - `DICE_DUEL_SCOREBOARD`: scoreboard file path
//! - `DICE_DUEL_SEED`: fixed RNG seed (unset = entropy)
//! - `DICE_DUEL_PACING_MS`: delay between dice reveal and result

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound on the round count, shared by validation and the scoreboard format.
pub const MAX_ROUNDS: u32 = 10;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Balance every session starts with.
    pub starting_balance: i64,

    /// Highest selectable round count (lowest is always 1).
    pub max_rounds: u32,

    /// Maximum player name length in characters.
    pub max_name_len: usize,

    /// Where the leaderboard is persisted.
    pub scoreboard_path: PathBuf,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Presentation delay; carries no game semantics.
    pub pacing: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            max_rounds: MAX_ROUNDS,
            max_name_len: 25,
            scoreboard_path: PathBuf::from("scoreboard.txt"),
            seed: None,
            pacing: Duration::ZERO,
        }
    }
}

impl GameConfig {
    /// Default configuration overlaid with `DICE_DUEL_*` environment variables.
    ///
    /// Unparsable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup. Split out so tests don't touch
    /// the process environment.
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("DICE_DUEL_SCOREBOARD").filter(|p| !p.trim().is_empty()) {
            self.scoreboard_path = PathBuf::from(path);
        }
        if let Some(seed) = lookup("DICE_DUEL_SEED").and_then(|s| s.trim().parse().ok()) {
            self.seed = Some(seed);
        }
        if let Some(ms) = lookup("DICE_DUEL_PACING_MS").and_then(|s| s.trim().parse().ok()) {
            self.pacing = Duration::from_millis(ms);
        }
        self
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        assert!(balance > 0, "Starting balance must be positive");
        self.starting_balance = balance;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max: u32) -> Self {
        assert!(
            (1..=MAX_ROUNDS).contains(&max),
            "Round limit must be between 1 and {MAX_ROUNDS}"
        );
        self.max_rounds = max;
        self
    }

    #[must_use]
    pub fn with_scoreboard_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scoreboard_path = path.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Check a round count against `1..=max_rounds`.
    #[must_use]
    pub fn is_valid_round_count(&self, rounds: u32) -> bool {
        (1..=self.max_rounds).contains(&rounds)
    }
}
