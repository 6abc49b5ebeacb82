//! Console entry point.
//!
//! Environment:
//! - `DICE_DUEL_SCOREBOARD`, `DICE_DUEL_SEED`, `DICE_DUEL_PACING_MS`: see `GameConfig`
//! - `DICE_DUEL_LOG`: log level for stderr (default `warn`)

use std::io;
use std::process::ExitCode;

use dice_duel::{ConsolePrompter, DiceError, DiceRng, GameConfig, Leaderboard, ScoreboardStore, Scoreboard};
use tracing::{error, info, Level};

fn main() -> ExitCode {
    let level = std::env::var("DICE_DUEL_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env();
    let mut rng = match config.seed {
        Some(seed) => DiceRng::new(seed),
        None => DiceRng::from_entropy(),
    };
    info!(seed = rng.seed(), path = %config.scoreboard_path.display(), "starting");

    let store = ScoreboardStore::new(&config.scoreboard_path);
    let mut leaderboard = match Leaderboard::open(store.clone()) {
        Ok(leaderboard) => leaderboard,
        Err(e) => {
            error!(error = %e, "could not read scoreboard, starting empty");
            Leaderboard::with_board(store, Scoreboard::new())
        }
    };

    let stdin = io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), io::stdout()).with_pacing(config.pacing);

    match dice_duel::run(&config, &mut rng, &mut leaderboard, &mut prompter) {
        Ok(played) => {
            info!(played, "goodbye");
            println!("Thanks for playing!");
            ExitCode::SUCCESS
        }
        Err(DiceError::InputClosed) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "game aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
