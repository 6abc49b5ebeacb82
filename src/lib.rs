//! # dice-duel
//!
//! A turn-based dice betting game against the computer, with a persistent
//! top-3 leaderboard per round count.
//!
//! ## Rules
//!
//! Each round the player bets part of their balance, then both sides roll
//! two dice. Snake eyes for the player wipes out the balance, double sixes
//! pays three times the bet, otherwise the higher total wins the bet. A
//! game ends when the player goes bankrupt, quits between rounds, or
//! finishes every round. Only finished games are ranked.
//!
//! ## Architecture
//!
//! - **Owned scoreboard**: loaded once into a `Leaderboard` handle which is
//!   passed by `&mut` to the one place that records scores.
//! - **Pure state machine**: `Session` knows nothing about I/O; a `Prompter`
//!   supplies input and renders events, so the same game runs on a console
//!   or a scripted test driver.
//! - **Deterministic dice**: `DiceRng` is a seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: configuration, dice RNG, errors
//! - `scoreboard`: entries, ranking, text format, persistence
//! - `rules`: dice and round resolution
//! - `session`: session state machine, validation, `Prompter`, drivers
//! - `console`: line-based `Prompter` over stdin/stdout

pub mod console;
pub mod core;
pub mod rules;
pub mod scoreboard;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DiceError, DiceRng, GameConfig, Result};

pub use crate::scoreboard::{
    top_scores, update, Bucket, Leaderboard, ScoreEntry, Scoreboard, ScoreboardStore, BUCKET_CAPACITY,
};

pub use crate::rules::{resolve_round, resolve_with_dice, Dice, OutcomeKind, RoundOutcome};

pub use crate::session::{
    play_session, run, GameEvent, Prompter, Session, SessionSignal, SessionState, Terminal,
};

pub use crate::console::ConsolePrompter;
