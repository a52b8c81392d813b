//! Candidate generation
//!
//! Expands the per-position admissible sets into every string they allow.
//! Position 0 varies slowest and the last position fastest; each position
//! walks its letters alphabetically.
//!
//! The output size is the product of the set sizes. With no rows that is
//! 26^N, and nothing here truncates it: callers check the row count first.

use super::constraints::Constraints;

/// Iterator over the cartesian product of admissible letters
pub struct Combinations {
    letters: Vec<Vec<u8>>,
    cursor: Vec<usize>,
    done: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(constraints: &Constraints) -> Self {
        let letters: Vec<Vec<u8>> = constraints
            .positions()
            .iter()
            .map(|set| set.to_vec())
            .collect();
        let done = letters.is_empty() || letters.iter().any(Vec::is_empty);

        Self {
            cursor: vec![0; letters.len()],
            letters,
            done,
        }
    }

    /// Step the odometer, carrying leftwards
    fn advance(&mut self) {
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.letters[pos].len() {
                return;
            }
            self.cursor[pos] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let word: String = self
            .cursor
            .iter()
            .zip(&self.letters)
            .map(|(&idx, letters)| char::from(letters[idx]))
            .collect();
        self.advance();

        Some(word)
    }
}

/// Every string admitted by `constraints`, in odometer order
///
/// # Examples
/// ```
/// use auto_wordle::core::Row;
/// use auto_wordle::solver::{accumulate, generate};
///
/// let rows = vec![Row::parse("TRAIn").unwrap()];
/// let candidates = generate(&accumulate(&rows, 5).unwrap());
///
/// assert_eq!(candidates.len(), 25);
/// assert_eq!(candidates[0], "traia");
/// assert!(candidates.contains(&"trait".to_string()));
/// ```
#[must_use]
pub fn generate(constraints: &Constraints) -> Vec<String> {
    let mut words = Vec::with_capacity(constraints.combination_count().min(1 << 20));
    words.extend(Combinations::new(constraints));
    words
}
