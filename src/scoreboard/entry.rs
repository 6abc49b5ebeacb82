//! Score entries and ranked buckets.
//!
//! A `Bucket` is the top-N list for one round count. It is kept sorted
//! descending by score; equal scores keep insertion order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of entries kept per bucket.
pub const BUCKET_CAPACITY: usize = 3;

/// A single leaderboard line: who, and the balance they finished with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.score)
    }
}

/// Ranked list of at most `BUCKET_CAPACITY` entries.
///
/// Inline storage holds the capacity plus the one overflow entry that
/// exists between push and truncate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    entries: SmallVec<[ScoreEntry; BUCKET_CAPACITY + 1]>,
}

impl Bucket {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append, stable-sort descending, truncate.
    ///
    /// Returns the 1-based rank of the new entry, or `None` if it was the
    /// overflow entry and got dropped.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        // Stable sort places the new entry after every existing entry with
        // an equal or higher score.
        let index = self.entries.iter().filter(|e| e.score >= entry.score).count();

        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(BUCKET_CAPACITY);

        (index < BUCKET_CAPACITY).then_some(index + 1)
    }

    /// Entries in ranked order.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest score a new entry must beat to get in, if the bucket is full.
    #[must_use]
    pub fn cutoff(&self) -> Option<i64> {
        if self.entries.len() < BUCKET_CAPACITY {
            None
        } else {
            self.entries.last().map(|e| e.score)
        }
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a ScoreEntry;
    type IntoIter = std::slice::Iter<'a, ScoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
