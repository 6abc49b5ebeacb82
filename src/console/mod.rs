//! Line-based console collaborator.
//!
//! Generic over the reader and writer so tests can script a whole game
//! with an in-memory buffer.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::core::{DiceError, Result};
use crate::rules::OutcomeKind;
use crate::session::{
    parse_bet, parse_continue_choice, parse_play_again, parse_round_count, validate_name, GameEvent,
    Prompter, SessionSignal,
};

/// Blocking prompter over any `BufRead` + `Write` pair.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    pacing: Duration,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pacing: Duration::ZERO,
        }
    }

    /// Pause before revealing each round's result.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Consume the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until `parse` accepts the line.
    ///
    /// Validation errors are printed and the question asked again; end of
    /// input is `InputClosed`.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            write!(self.output, "{prompt} ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DiceError::InputClosed);
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => writeln!(self.output, "{e}")?,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn request_name(&mut self, max_len: usize) -> Result<String> {
        self.ask("Enter your name:", |s| validate_name(s, max_len))
    }

    fn request_round_count(&mut self, max: u32) -> Result<u32> {
        let prompt = format!("How many rounds (1-{max})?");
        self.ask(&prompt, |s| parse_round_count(s, max))
    }

    fn request_bet(&mut self, balance: i64) -> Result<i64> {
        let prompt = format!("Place your bet (1-{balance}):");
        self.ask(&prompt, |s| parse_bet(s, balance))
    }

    fn request_continue_or_quit(&mut self) -> Result<SessionSignal> {
        self.ask("Continue (c) or quit (q)?", parse_continue_choice)
    }

    fn request_play_again(&mut self) -> Result<bool> {
        self.ask("Play again (y/n)?", parse_play_again)
    }

    fn display(&mut self, event: &GameEvent<'_>) -> Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::SessionStarted {
                player_name,
                round_count,
                balance,
            } => {
                writeln!(out, "Welcome, {player_name}! {round_count} round(s), starting balance {balance}.")?;
            }
            GameEvent::RoundResolved {
                round,
                round_count,
                outcome,
                balance,
            } => {
                writeln!(out, "Round {round}/{round_count}")?;
                writeln!(out, "  You rolled:      {}", outcome.player)?;
                writeln!(out, "  Computer rolled: {}", outcome.computer)?;
                out.flush()?;
                if !self.pacing.is_zero() {
                    std::thread::sleep(self.pacing);
                }
                let verdict = match outcome.kind {
                    OutcomeKind::SnakeEyes => "Snake eyes! You lose everything.".to_string(),
                    OutcomeKind::DoubleSixes => format!("Double sixes! You win {}.", outcome.delta),
                    OutcomeKind::Win => format!("You win {}.", outcome.delta),
                    OutcomeKind::Loss => format!("You lose {}.", -outcome.delta),
                    OutcomeKind::Push => "It's a tie. Your bet is returned.".to_string(),
                };
                writeln!(out, "  {verdict} Balance: {balance}")?;
            }
            GameEvent::Bankrupt { round } => {
                writeln!(out, "You went bankrupt in round {round}. Game over.")?;
            }
            GameEvent::QuitEarly { round, balance } => {
                writeln!(out, "You left after round {round} with {balance}. Early exits are not ranked.")?;
            }
            GameEvent::Completed { balance, rank } => {
                writeln!(out, "Game complete! Final balance: {balance}.")?;
                if let Some(rank) = rank {
                    writeln!(out, "You placed #{rank} on the leaderboard!")?;
                }
            }
            GameEvent::LeaderboardSnapshot { round_count, entries } => {
                writeln!(out, "Top scores for {round_count} round(s):")?;
                if entries.is_empty() {
                    writeln!(out, "  (none yet)")?;
                }
                for (i, entry) in entries.iter().enumerate() {
                    writeln!(out, "  {}. {} - {}", i + 1, entry.name, entry.score)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
