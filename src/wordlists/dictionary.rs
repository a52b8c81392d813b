//! In-memory dictionary of valid words

use rustc_hash::FxHashSet;

/// Read-only set of known-valid words
///
/// Words are stored trimmed and lowercased. Shared across filter workers
/// without locking since nothing mutates it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words
    ///
    /// Blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use auto_wordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Crane", " slate ", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("crane"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
            })
            .collect();

        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words with exactly `len` letters
    #[must_use]
    pub fn count_of_len(&self, len: usize) -> usize {
        self.words.iter().filter(|w| w.len() == len).count()
    }
}
