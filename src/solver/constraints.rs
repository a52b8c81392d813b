//! Constraint accumulation
//!
//! Folds every feedback row into a per-position admissible alphabet plus the
//! set of letters known to be somewhere in the answer. Recomputed from scratch
//! on every query; nothing is cached between calls.
//!
//! # Pass order
//! All absent observations first, then all misplaced, then all correct.
//! Later passes narrow what earlier ones built, so a correct letter always
//! wins for its own position. A letter that one row marks absent and another
//! marks correct is still removed everywhere by the first pass and then
//! restored only at the correct position.

use super::letters::LetterSet;
use crate::core::{LetterState, Row};
use crate::error::SolverError;

/// Result of folding all rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    positions: Vec<LetterSet>,
    known: LetterSet,
}

impl Constraints {
    /// Admissible letters at each position
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[LetterSet] {
        &self.positions
    }

    /// Letters confirmed present somewhere in the answer
    #[inline]
    #[must_use]
    pub const fn known(&self) -> LetterSet {
        self.known
    }

    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.positions.len()
    }

    /// Number of strings the generator would produce
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.positions
            .iter()
            .fold(1usize, |acc, set| acc.saturating_mul(set.len()))
    }

    /// True if every letter of `word` is admissible at its position
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        word.len() == self.positions.len()
            && word
                .bytes()
                .zip(&self.positions)
                .all(|(b, set)| set.contains(b))
    }
}

/// Fold the rows into per-position constraints
///
/// # Errors
/// Returns `LengthMismatch` if a row does not have `word_len` letters, and
/// `ContradictoryInput` if more than `word_len` distinct letters end up known.
///
/// # Examples
/// ```
/// use auto_wordle::core::Row;
/// use auto_wordle::solver::accumulate;
///
/// let rows = vec![Row::parse("cRAn?e").unwrap()];
/// let constraints = accumulate(&rows, 5).unwrap();
///
/// assert_eq!(constraints.positions()[1].to_string(), "r");
/// assert_eq!(constraints.known().to_string(), "anr");
/// ```
pub fn accumulate(rows: &[Row], word_len: usize) -> Result<Constraints, SolverError> {
    if let Some(row) = rows.iter().find(|row| row.len() != word_len) {
        return Err(SolverError::LengthMismatch {
            expected: word_len,
            found: row.len(),
        });
    }

    let mut positions = vec![LetterSet::FULL; word_len];
    let mut known = LetterSet::EMPTY;

    for pass in [
        LetterState::Absent,
        LetterState::Misplaced,
        LetterState::Correct,
    ] {
        for row in rows {
            for (i, tile) in row.tiles().iter().enumerate() {
                if tile.state != pass {
                    continue;
                }
                match pass {
                    LetterState::Absent => {
                        for set in &mut positions {
                            set.remove(tile.letter);
                        }
                    }
                    // Only sound when the letter is not repeated in the answer
                    LetterState::Misplaced => {
                        positions[i].remove(tile.letter);
                        known.insert(tile.letter);
                    }
                    LetterState::Correct => {
                        positions[i] = LetterSet::single(tile.letter);
                        known.insert(tile.letter);
                    }
                }
            }
        }
    }

    if known.len() > word_len {
        return Err(SolverError::ContradictoryInput {
            known: known.len(),
            word_len,
        });
    }

    // Every letter is identified; assumes no repeated letters in the answer
    if known.len() == word_len {
        for set in &mut positions {
            *set = set.intersection(known);
        }
    }

    Ok(Constraints { positions, known })
}
