//! Game session state machine.
//!
//! ```text
//! Setup ──start──▶ RoundInProgress ──play_round──┬─▶ Bankrupt        (balance <= 0)
//!                        ▲                       ├─▶ Completed       (last round)
//!                        │                       └─▶ AwaitingContinue
//!                        └──────── Continue ─────────────┤
//!                                                        └─ Quit ─▶ QuitEarly
//! ```
//!
//! The machine never touches I/O or the leaderboard. Drivers read
//! [`Session::should_commit`] to decide whether to record the score.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{DiceError, DiceRng, GameConfig, Result};
use crate::rules::{resolve_round, resolve_with_dice, RoundOutcome};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Setup,
    RoundInProgress,
    AwaitingContinue,
    Bankrupt,
    QuitEarly,
    Completed,
}

impl SessionState {
    /// The terminal variant, if this state is one.
    #[must_use]
    pub fn terminal(self) -> Option<Terminal> {
        match self {
            SessionState::Bankrupt => Some(Terminal::Bankrupt),
            SessionState::QuitEarly => Some(Terminal::QuitEarly),
            SessionState::Completed => Some(Terminal::Completed),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    Bankrupt,
    QuitEarly,
    Completed,
}

/// Player's answer between rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionSignal {
    Continue,
    Quit,
}

/// One game: a player, a round count, and a running balance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    player_name: String,
    round_count: u32,
    starting_balance: i64,
    balance: i64,
    current_round: u32,
    state: SessionState,
    history: Vec<RoundOutcome>,
}

impl Session {
    /// Create a session in `Setup`. `round_count` must be in `1..=max_rounds`.
    pub fn new(config: &GameConfig, player_name: impl Into<String>, round_count: u32) -> Result<Self> {
        if !config.is_valid_round_count(round_count) {
            return Err(DiceError::InvalidRoundCount {
                max: config.max_rounds,
            });
        }

        Ok(Self {
            player_name: player_name.into(),
            round_count,
            starting_balance: config.starting_balance,
            balance: config.starting_balance,
            current_round: 0,
            state: SessionState::Setup,
            history: Vec::new(),
        })
    }

    /// Setup → RoundInProgress at round 1 with the starting balance.
    pub fn start(&mut self) -> Result<()> {
        self.expect_state(SessionState::Setup, "start")?;
        self.current_round = 1;
        self.balance = self.starting_balance;
        self.state = SessionState::RoundInProgress;
        Ok(())
    }

    /// Roll and resolve the current round.
    pub fn play_round(&mut self, rng: &mut DiceRng, bet: i64) -> Result<RoundOutcome> {
        self.expect_state(SessionState::RoundInProgress, "play a round")?;
        let outcome = resolve_round(rng, self.balance, bet)?;
        self.apply_outcome(outcome)?;
        Ok(outcome)
    }

    /// Apply an already resolved round and advance the state.
    pub fn apply_outcome(&mut self, outcome: RoundOutcome) -> Result<()> {
        self.expect_state(SessionState::RoundInProgress, "apply a round")?;
        if outcome.bet <= 0 || outcome.bet > self.balance {
            return Err(DiceError::InvalidBet {
                balance: self.balance,
            });
        }
        // Delta is only meaningful against the balance it was resolved with.
        let outcome = resolve_with_dice(self.balance, outcome.bet, outcome.player, outcome.computer);

        self.balance = outcome.apply(self.balance);
        self.history.push(outcome);

        self.state = if self.balance <= 0 {
            SessionState::Bankrupt
        } else if self.current_round < self.round_count {
            SessionState::AwaitingContinue
        } else {
            SessionState::Completed
        };

        if let Some(terminal) = self.state.terminal() {
            info!(
                player = %self.player_name,
                rounds = self.round_count,
                round = self.current_round,
                balance = self.balance,
                ?terminal,
                "session ended"
            );
        }
        Ok(())
    }

    /// Handle the continue/quit answer in `AwaitingContinue`.
    pub fn signal(&mut self, signal: SessionSignal) -> Result<()> {
        self.expect_state(SessionState::AwaitingContinue, "continue or quit")?;
        match signal {
            SessionSignal::Continue => {
                self.current_round += 1;
                self.state = SessionState::RoundInProgress;
            }
            SessionSignal::Quit => {
                self.state = SessionState::QuitEarly;
                info!(
                    player = %self.player_name,
                    round = self.current_round,
                    balance = self.balance,
                    "player quit early"
                );
            }
        }
        Ok(())
    }

    fn expect_state(&self, expected: SessionState, action: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DiceError::InvalidTransition {
                action,
                state: self.state,
            })
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// 1-based round being played or just played; 0 before `start`.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn terminal(&self) -> Option<Terminal> {
        self.state.terminal()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.terminal().is_some()
    }

    /// Only a completed session goes on the leaderboard.
    #[must_use]
    pub fn should_commit(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Rounds resolved so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundOutcome] {
        &self.history
    }
}
