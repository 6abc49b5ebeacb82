//! Owning handle over the in-memory scoreboard and its store.
//!
//! Loaded once at start-up and passed by `&mut` to whoever records a score,
//! so there is exactly one writer for the lifetime of the process.

use tracing::info;

use super::entry::ScoreEntry;
use super::ranking::{self, Scoreboard};
use super::store::ScoreboardStore;
use crate::core::Result;

#[derive(Debug)]
pub struct Leaderboard {
    board: Scoreboard,
    store: ScoreboardStore,
}

impl Leaderboard {
    /// Load the scoreboard from `store`.
    pub fn open(store: ScoreboardStore) -> Result<Self> {
        let board = store.load()?;
        Ok(Self { board, store })
    }

    /// Wrap an already loaded scoreboard, e.g. after a failed load.
    #[must_use]
    pub fn with_board(store: ScoreboardStore, board: Scoreboard) -> Self {
        Self { board, store }
    }

    /// Record a finished game and persist every bucket.
    ///
    /// The in-memory board is updated even if the save fails; it stays the
    /// source of truth and the next successful save writes it out.
    ///
    /// Returns the 1-based rank of the new entry if it made the top list.
    pub fn record(&mut self, round_count: u32, name: &str, score: i64) -> Result<Option<usize>> {
        let rank = self.board.insert(round_count, ScoreEntry::new(name, score));
        info!(round_count, name, score, ?rank, "recorded score");
        self.store.save(&self.board)?;
        Ok(rank)
    }

    /// Ranked entries for `round_count`.
    #[must_use]
    pub fn top_scores(&self, round_count: u32) -> &[ScoreEntry] {
        ranking::top_scores(&self.board, round_count)
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.board
    }

    #[must_use]
    pub fn store(&self) -> &ScoreboardStore {
        &self.store
    }
}
