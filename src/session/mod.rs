//! Game sessions: the state machine, input validation, the collaborator
//! trait, and the drivers that tie them to the leaderboard.

pub mod driver;
pub mod prompter;
pub mod state;
pub mod validate;

pub use driver::{play_session, run};
pub use prompter::{GameEvent, Prompter};
pub use state::{Session, SessionSignal, SessionState, Terminal};
pub use validate::{parse_bet, parse_continue_choice, parse_play_again, parse_round_count, validate_name};
