//! Round resolution.
//!
//! Outcome precedence, first match wins:
//! 1. Snake eyes (player rolls 1,1): the whole balance is lost.
//! 2. Double sixes (player rolls 6,6): the bet pays 3x.
//! 3. Totals: higher wins the bet, lower loses it, equal is a push.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DiceError, DiceRng, Result};

/// A pair of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice(pub u8, pub u8);

impl Dice {
    /// Roll two dice.
    pub fn roll(rng: &mut DiceRng) -> Self {
        let first = rng.roll_die();
        let second = rng.roll_die();
        Self(first, second)
    }

    #[must_use]
    pub const fn total(self) -> u8 {
        self.0 + self.1
    }

    #[must_use]
    pub const fn is_snake_eyes(self) -> bool {
        self.0 == 1 && self.1 == 1
    }

    #[must_use]
    pub const fn is_double_sixes(self) -> bool {
        self.0 == 6 && self.1 == 6
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} = {}", self.0, self.1, self.total())
    }
}

/// Which rule decided the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    SnakeEyes,
    DoubleSixes,
    Win,
    Loss,
    Push,
}

/// Result of one round. Not persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player: Dice,
    pub computer: Dice,
    pub bet: i64,
    /// Change to apply to the balance.
    pub delta: i64,
    pub kind: OutcomeKind,
}

impl RoundOutcome {
    /// Balance after this round, never below zero. Snake eyes is always zero.
    #[must_use]
    pub fn apply(&self, balance: i64) -> i64 {
        match self.kind {
            OutcomeKind::SnakeEyes => 0,
            _ => balance.saturating_add(self.delta).max(0),
        }
    }
}

/// Roll four dice (player first, then computer) and resolve the round.
///
/// Requires `0 < bet <= balance`.
pub fn resolve_round(rng: &mut DiceRng, balance: i64, bet: i64) -> Result<RoundOutcome> {
    if bet <= 0 || bet > balance {
        return Err(DiceError::InvalidBet { balance });
    }

    let player = Dice::roll(rng);
    let computer = Dice::roll(rng);
    Ok(resolve_with_dice(balance, bet, player, computer))
}

/// Resolve a round from known dice.
#[must_use]
pub fn resolve_with_dice(balance: i64, bet: i64, player: Dice, computer: Dice) -> RoundOutcome {
    let (kind, delta) = if player.is_snake_eyes() {
        (OutcomeKind::SnakeEyes, -balance)
    } else if player.is_double_sixes() {
        (OutcomeKind::DoubleSixes, 3 * bet)
    } else {
        match player.total().cmp(&computer.total()) {
            std::cmp::Ordering::Greater => (OutcomeKind::Win, bet),
            std::cmp::Ordering::Less => (OutcomeKind::Loss, -bet),
            std::cmp::Ordering::Equal => (OutcomeKind::Push, 0),
        }
    };

    debug!(%player, %computer, bet, delta, ?kind, "round resolved");

    RoundOutcome {
        player,
        computer,
        bet,
        delta,
        kind,
    }
}
