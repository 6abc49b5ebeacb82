//! Ranking engine: the per-round-count scoreboard and its top-N rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::{Bucket, ScoreEntry};

/// Leaderboard buckets keyed by round count.
///
/// `BTreeMap` keeps buckets in ascending round-count order, which is also
/// the order they are written to disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    buckets: BTreeMap<u32, Bucket>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a score into the bucket for `round_count`, creating it if absent.
    ///
    /// Returns the 1-based rank of the new entry, or `None` if it did not
    /// make the cut.
    pub fn insert(&mut self, round_count: u32, entry: ScoreEntry) -> Option<usize> {
        let bucket = self.buckets.entry(round_count).or_default();
        let rank = bucket.insert(entry);
        debug!(round_count, ?rank, size = bucket.len(), "scoreboard insert");
        rank
    }

    /// Bucket for `round_count`, if any score was ever recorded for it.
    #[must_use]
    pub fn bucket(&self, round_count: u32) -> Option<&Bucket> {
        self.buckets.get(&round_count)
    }

    /// Iterate `(round_count, bucket)` in ascending round-count order.
    pub fn buckets(&self) -> impl Iterator<Item = (u32, &Bucket)> {
        self.buckets.iter().map(|(&rounds, bucket)| (rounds, bucket))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}

/// Record a score and return the updated scoreboard.
pub fn update(mut scoreboard: Scoreboard, round_count: u32, name: &str, score: i64) -> Scoreboard {
    scoreboard.insert(round_count, ScoreEntry::new(name, score));
    scoreboard
}

/// Ranked entries for `round_count`; empty if none recorded.
#[must_use]
pub fn top_scores(scoreboard: &Scoreboard, round_count: u32) -> &[ScoreEntry] {
    scoreboard
        .bucket(round_count)
        .map(Bucket::entries)
        .unwrap_or(&[])
}
