//! Feedback row parsing
//!
//! A row annotates one guess with the feedback it received:
//! - uppercase letter = correct (right letter, right position)
//! - letter followed by `?` = misplaced (in the word, wrong position)
//! - lowercase letter = absent (not in the word)
//!
//! `cRAn?e` reads as C absent, R and A correct, N misplaced, E absent.

use crate::error::SolverError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Letters and `?` markers only, 5 to 10 characters in total
static ROW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z?A-Z]{5,10}$").expect("row pattern is valid"));

/// Feedback received for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Misplaced,
    Absent,
}

/// One letter of a row together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Lowercase ASCII letter
    pub letter: u8,
    pub state: LetterState,
}

/// A parsed guess-and-feedback annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    raw: String,
    tiles: Vec<Tile>,
}

impl Row {
    /// Parse a raw annotation string
    ///
    /// Scans left to right. A letter followed by `?` is misplaced and the `?`
    /// is consumed with it; otherwise uppercase is correct and lowercase absent.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidFormat` if the string is not 5-10 characters
    /// of letters and `?`, or if a `?` does not directly follow a letter.
    ///
    /// # Examples
    /// ```
    /// use auto_wordle::core::{LetterState, Row};
    ///
    /// let row = Row::parse("cRAn?e").unwrap();
    /// assert_eq!(row.len(), 5);
    /// assert_eq!(row.tiles()[3].letter, b'n');
    /// assert_eq!(row.tiles()[3].state, LetterState::Misplaced);
    ///
    /// assert!(Row::parse("cr4ne").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, SolverError> {
        if !ROW_PATTERN.is_match(raw) {
            return Err(SolverError::InvalidFormat(raw.to_string()));
        }

        // Pattern guarantees ASCII, so bytes are characters
        let bytes = raw.as_bytes();
        let mut tiles = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            let ch = bytes[i];
            if ch == b'?' {
                // A marker with no letter in front of it
                return Err(SolverError::InvalidFormat(raw.to_string()));
            }

            let state = if bytes.get(i + 1) == Some(&b'?') {
                i += 1;
                LetterState::Misplaced
            } else if ch.is_ascii_uppercase() {
                LetterState::Correct
            } else {
                LetterState::Absent
            };

            tiles.push(Tile {
                letter: ch.to_ascii_lowercase(),
                state,
            });
            i += 1;
        }

        Ok(Self {
            raw: raw.to_string(),
            tiles,
        })
    }

    /// The annotation exactly as entered
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of letters described (raw length minus `?` markers)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The guessed word in lowercase, without feedback
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().map(|t| char::from(t.letter)).collect()
    }
}

impl FromStr for Row {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the row back in annotation notation
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            let ch = char::from(tile.letter);
            match tile.state {
                LetterState::Correct => write!(f, "{}", ch.to_ascii_uppercase())?,
                LetterState::Misplaced => write!(f, "{ch}?")?,
                LetterState::Absent => write!(f, "{ch}")?,
            }
        }
        Ok(())
    }
}
