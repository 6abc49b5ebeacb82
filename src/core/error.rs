//! Error taxonomy for the game.
//!
//! Validation errors (`InvalidName`, `ReservedName`, `InvalidRoundCount`,
//! `InvalidBet`, `InvalidChoice`) never escape the console collaborator: it re-prompts
//! with their `Display` text. `InvalidTransition` means a driver called the
//! session state machine out of order.

use thiserror::Error;

use crate::session::SessionState;

/// Errors produced by the game core and its collaborators.
#[derive(Debug, Error)]
pub enum DiceError {
    #[error("scoreboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Name must be 1-{max} characters of letters and spaces.")]
    InvalidName { max: usize },

    #[error("The name \"{name}\" is reserved, please pick another.")]
    ReservedName { name: &'static str },

    #[error("Number of rounds must be between 1 and {max}.")]
    InvalidRoundCount { max: u32 },

    #[error("Bet must be between 1 and {balance}.")]
    InvalidBet { balance: i64 },

    #[error("Please answer {expected}.")]
    InvalidChoice { expected: &'static str },

    #[error("cannot {action} while session is {state:?}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },

    #[error("input closed")]
    InputClosed,
}

impl DiceError {
    /// True for errors a prompter should recover from by asking again.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DiceError::InvalidName { .. }
                | DiceError::ReservedName { .. }
                | DiceError::InvalidRoundCount { .. }
                | DiceError::InvalidBet { .. }
                | DiceError::InvalidChoice { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DiceError>;
