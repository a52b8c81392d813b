//! Main solver interface

use super::constraints::{Constraints, accumulate};
use super::filter::filter_candidates;
use super::generator::generate;
use crate::config::SolverConfig;
use crate::core::Session;
use crate::error::SolverError;
use crate::wordlists::Dictionary;

/// Narrows candidate answers for a session
///
/// Holds only read-only state; every query recomputes from the session's rows.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over the given dictionary
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SolverConfig) -> Self {
        Self { dictionary, config }
    }

    /// Empty session sized to the configured word length
    #[must_use]
    pub const fn new_session(&self) -> Session {
        Session::new(self.config.word_len())
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Fold the session's rows into per-position constraints
    ///
    /// # Errors
    /// Propagates `ContradictoryInput` and `LengthMismatch` from accumulation.
    pub fn constraints(&self, session: &Session) -> Result<Constraints, SolverError> {
        accumulate(session.rows(), session.word_len())
    }

    /// Number of raw combinations, without building them
    ///
    /// # Errors
    /// Propagates accumulation errors.
    pub fn combination_count(&self, session: &Session) -> Result<usize, SolverError> {
        Ok(self.constraints(session)?.combination_count())
    }

    /// Every letter combination the rows allow, unfiltered
    ///
    /// # Errors
    /// Returns `EmptySession` when no rows were entered, otherwise propagates
    /// accumulation errors.
    pub fn combinations(&self, session: &Session) -> Result<Vec<String>, SolverError> {
        if session.is_empty() {
            return Err(SolverError::EmptySession);
        }
        Ok(generate(&self.constraints(session)?))
    }

    /// Dictionary words consistent with every row
    ///
    /// # Errors
    /// Returns `EmptySession` when no rows were entered, otherwise propagates
    /// accumulation and worker errors.
    pub fn find_words(&self, session: &Session) -> Result<Vec<String>, SolverError> {
        if session.is_empty() {
            return Err(SolverError::EmptySession);
        }

        let constraints = self.constraints(session)?;
        let candidates = generate(&constraints);

        filter_candidates(
            &candidates,
            self.dictionary,
            constraints.known(),
            self.config.workers(),
        )
    }
}
