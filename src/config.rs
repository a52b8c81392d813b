//! Solver configuration
//!
//! Validated settings shared by the session, the accumulator and the filter.

use crate::error::SolverError;

/// Word length assumed when none is given
pub const DEFAULT_WORD_LEN: usize = 5;

/// Number of filter workers spawned per search
pub const DEFAULT_WORKERS: usize = 8;

/// Shortest word a feedback row can describe
pub const MIN_WORD_LEN: usize = 5;

/// Longest word a feedback row can describe
pub const MAX_WORD_LEN: usize = 10;

/// Settings for one solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    word_len: usize,
    workers: usize,
}

impl SolverConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfig` if `word_len` is outside 5..=10
    /// or `workers` is zero.
    pub fn new(word_len: usize, workers: usize) -> Result<Self, SolverError> {
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word_len) {
            return Err(SolverError::InvalidConfig(format!(
                "word length must be between {MIN_WORD_LEN} and {MAX_WORD_LEN}, got {word_len}"
            )));
        }
        if workers == 0 {
            return Err(SolverError::InvalidConfig(
                "at least one filter worker is required".to_string(),
            ));
        }

        Ok(Self { word_len, workers })
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_len: DEFAULT_WORD_LEN,
            workers: DEFAULT_WORKERS,
        }
    }
}
