//! Length-partitioned candidate lists
//!
//! A candidate list is the immutable set of jamo strings that gameplay accepts
//! as guesses and draws answers from, for one jamo length.

use crate::core::{JamoWord, is_reachable};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Sorted, duplicate-free jamo strings of one fixed length
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateList {
    length: usize,
    words: Vec<String>,
}

impl CandidateList {
    /// Build a list from arbitrary entries
    ///
    /// Entries of the wrong length or with unreachable jamo are dropped; the
    /// rest are sorted and deduplicated. Entries are expected to already be
    /// jamo, so no decomposition happens here.
    #[must_use]
    pub fn new<I, S>(length: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|w| w.chars().count() == length && is_reachable(w))
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { length, words }
    }

    /// Wrap entries that are already sorted, unique and valid
    pub(crate) fn from_sorted(length: usize, words: Vec<String>) -> Self {
        debug_assert!(words.windows(2).all(|w| w[0] < w[1]));
        Self { length, words }
    }

    /// Jamo length shared by every entry
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
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

    /// Membership test on the jamo form
    #[must_use]
    pub fn contains(&self, jamo: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(jamo)).is_ok()
    }

    /// Whether a validated word is in the list
    #[must_use]
    pub fn contains_word(&self, word: &JamoWord) -> bool {
        self.contains(word.text())
    }

    /// Add entries from another list of the same length
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.length,
            self.words.iter().chain(&other.words).cloned(),
        )
    }

    /// Pick a uniformly random entry
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}
