//! Error type shared by the parser, accumulator and filter

use thiserror::Error;

/// Everything that can go wrong while narrowing candidates
#[derive(Error, Debug)]
pub enum SolverError {
    /// Raw row is not 5-10 characters of letters and `?` markers
    #[error("invalid row '{0}': must be 5 to 10 letters long, only letters and ? are allowed")]
    InvalidFormat(String),

    /// Row does not describe a word of the session's length
    #[error("row has {found} letters but the session expects {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// More distinct letters are known present than the word can hold
    #[error("too many letters in word ({known} known for a {word_len}-letter word), please check your rows")]
    ContradictoryInput { known: usize, word_len: usize },

    /// Candidate search requested before any row was entered
    #[error("no rows entered yet, please enter at least one row")]
    EmptySession,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to start filter workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
