//! Leaderboard persistence and ranking.
//!
//! - `entry`: `ScoreEntry` and the top-3 `Bucket`
//! - `ranking`: `Scoreboard` plus the `update` / `top_scores` operations
//! - `format`: the `rounds:<N>` / `name:score` text format
//! - `store`: file load/save
//! - `leaderboard`: owning handle combining the board and its store

pub mod entry;
pub mod format;
pub mod leaderboard;
pub mod ranking;
pub mod store;

pub use entry::{Bucket, ScoreEntry, BUCKET_CAPACITY};
pub use format::{parse, parse_score, render};
pub use leaderboard::Leaderboard;
pub use ranking::{top_scores, update, Scoreboard};
pub use store::ScoreboardStore;
