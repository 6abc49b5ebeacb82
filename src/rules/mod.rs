//! Round rules: dice, outcomes, and the round resolver.
//!
//! The resolver has no side effects beyond drawing from the `DiceRng`;
//! showing the result is the collaborator's job.

pub mod resolver;

pub use resolver::{resolve_round, resolve_with_dice, Dice, OutcomeKind, RoundOutcome};
