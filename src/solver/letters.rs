//! Compact set of lowercase letters
//!
//! Stored as a 26-bit mask; bit `i` stands for the letter `b'a' + i`.
//! Iteration is always alphabetical.

use std::fmt;

const ALPHABET_MASK: u32 = (1 << 26) - 1;

/// Set of lowercase ASCII letters
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// All 26 letters
    pub const FULL: Self = Self(ALPHABET_MASK);

    /// No letters
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
        1 << (letter - b'a')
    }

    /// Set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    /// Set of distinct letters appearing in `word`
    ///
    /// Bytes outside a-z are ignored.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        word.bytes()
            .filter(u8::is_ascii_lowercase)
            .fold(Self::EMPTY, |set, b| set.with(b))
    }

    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&b| self.contains(b))
    }

    /// Letters in alphabetical order, collected
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(char::from)).finish()
    }
}

/// Letters written out alphabetically, e.g. `anr`
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_has_whole_alphabet() {
        assert_eq!(LetterSet::FULL.len(), 26);
        assert!(LetterSet::FULL.contains(b'a'));
        assert!(LetterSet::FULL.contains(b'z'));
        assert_eq!(LetterSet::FULL.to_string(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'r');
        set.insert(b'a');
        set.insert(b'r');
        assert_eq!(set.len(), 2);

        set.remove(b'r');
        assert!(!set.contains(b'r'));
        assert!(set.contains(b'a'));

        // Removing an absent letter is a no-op
        set.remove(b'z');
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.to_vec(), b"aberz".to_vec());
    }

    #[test]
    fn superset_checks() {
        let train = LetterSet::from_word("train");
        let known = LetterSet::from_word("arn");
        assert!(train.is_superset(known));
        assert!(!known.is_superset(train));
        assert!(train.is_superset(LetterSet::EMPTY));
    }

    #[test]
    fn intersection_narrows() {
        let a = LetterSet::from_word("crane");
        let b = LetterSet::from_word("train");
        assert_eq!(a.intersection(b).to_string(), "anr");
    }

    #[test]
    fn contains_rejects_non_letters() {
        assert!(!LetterSet::FULL.contains(b'?'));
        assert!(!LetterSet::FULL.contains(b'A'));
    }
}
