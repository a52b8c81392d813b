//! Accumulated guess history
//!
//! A session owns the ordered rows entered so far. Rows are only appended or
//! removed from the end, never edited in place.

use super::Row;
use crate::error::SolverError;

/// Ordered list of feedback rows for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    word_len: usize,
    rows: Vec<Row>,
}

impl Session {
    /// Start an empty session for words of `word_len` letters
    #[must_use]
    pub const fn new(word_len: usize) -> Self {
        Self {
            word_len,
            rows: Vec::new(),
        }
    }

    /// Parse a raw annotation and append it
    ///
    /// The session is left untouched on error.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the row does not parse, or `LengthMismatch`
    /// if it describes a word of a different length.
    pub fn push(&mut self, raw: &str) -> Result<&Row, SolverError> {
        let row = Row::parse(raw)?;
        self.push_row(row)
    }

    /// Append an already parsed row
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the row length differs from the session's.
    pub fn push_row(&mut self, row: Row) -> Result<&Row, SolverError> {
        if row.len() != self.word_len {
            return Err(SolverError::LengthMismatch {
                expected: self.word_len,
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Remove the most recent row, if any
    pub fn undo(&mut self) -> Option<Row> {
        self.rows.pop()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }
}
