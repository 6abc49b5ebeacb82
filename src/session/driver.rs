//! Drives sessions through a `Prompter`.

use tracing::{error, info};

use crate::core::{DiceRng, GameConfig, Result};
use crate::scoreboard::Leaderboard;

use super::prompter::{GameEvent, Prompter};
use super::state::{Session, SessionState, Terminal};

/// Play one full game and return the finished session.
///
/// Only a `Completed` session is recorded on the leaderboard. A failed save
/// is logged and the game carries on with the in-memory board.
pub fn play_session<P: Prompter + ?Sized>(
    config: &GameConfig,
    rng: &mut DiceRng,
    leaderboard: &mut Leaderboard,
    prompter: &mut P,
) -> Result<Session> {
    let name = prompter.request_name(config.max_name_len)?;
    let round_count = prompter.request_round_count(config.max_rounds)?;

    let mut session = Session::new(config, name, round_count)?;
    session.start()?;
    prompter.display(&GameEvent::SessionStarted {
        player_name: session.player_name(),
        round_count,
        balance: session.balance(),
    })?;

    loop {
        match session.state() {
            SessionState::RoundInProgress => {
                let bet = prompter.request_bet(session.balance())?;
                let outcome = session.play_round(rng, bet)?;
                prompter.display(&GameEvent::RoundResolved {
                    round: session.current_round(),
                    round_count,
                    outcome: &outcome,
                    balance: session.balance(),
                })?;
            }
            SessionState::AwaitingContinue => {
                let signal = prompter.request_continue_or_quit()?;
                session.signal(signal)?;
            }
            _ => break,
        }
    }

    match session.terminal() {
        Some(Terminal::Bankrupt) => {
            prompter.display(&GameEvent::Bankrupt {
                round: session.current_round(),
            })?;
        }
        Some(Terminal::QuitEarly) => {
            prompter.display(&GameEvent::QuitEarly {
                round: session.current_round(),
                balance: session.balance(),
            })?;
        }
        Some(Terminal::Completed) => {
            let rank = match leaderboard.record(round_count, session.player_name(), session.balance()) {
                Ok(rank) => rank,
                Err(e) => {
                    error!(error = %e, path = %leaderboard.store().path().display(), "failed to save scoreboard");
                    None
                }
            };
            prompter.display(&GameEvent::Completed {
                balance: session.balance(),
                rank,
            })?;
            prompter.display(&GameEvent::LeaderboardSnapshot {
                round_count,
                entries: leaderboard.top_scores(round_count),
            })?;
        }
        None => unreachable!("session loop exits only in a terminal state"),
    }

    Ok(session)
}

/// Play sessions until the player declines to play again.
///
/// Each session rolls from its own fork of `rng`. Returns how many
/// sessions were played.
pub fn run<P: Prompter + ?Sized>(
    config: &GameConfig,
    rng: &mut DiceRng,
    leaderboard: &mut Leaderboard,
    prompter: &mut P,
) -> Result<usize> {
    let mut played = 0;
    loop {
        let mut session_rng = rng.fork();
        let session = play_session(config, &mut session_rng, leaderboard, prompter)?;
        played += 1;
        info!(played, terminal = ?session.terminal(), "session finished");

        if !prompter.request_play_again()? {
            return Ok(played);
        }
    }
}
