//! Core types: configuration, dice RNG, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, MAX_ROUNDS};
pub use error::{DiceError, Result};
pub use rng::{DiceRng, DIE_FACES};
