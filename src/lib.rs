// Library interface for word-guess
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod text;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GameError, Result};
pub use game_state::{
    GameInterface, GuessOutcome, RoundState, Session, SessionEnd, SessionSummary, UserAction,
    game_loop,
};
pub use text::{TextStats, analyze};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};
