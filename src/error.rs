use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced before or around a game session.
///
/// Invalid guesses are not errors; the front-ends reject them and re-prompt.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("candidate word pool is empty")]
    EmptyPool,

    #[error("no input text or word list given")]
    MissingInput,

    #[error("input text contains no tokens")]
    EmptyText,

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
