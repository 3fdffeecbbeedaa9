//! Word lists for jamo Wordle
//!
//! Corpus parsing, the offline builder, candidate list files and the embedded
//! seed corpus.

pub mod builder;
pub mod candidates;
pub mod corpus;
pub mod dictionary;
mod embedded;
pub mod loader;

pub use builder::{BuildOptions, LengthSelector, SUPPORTED_LENGTHS, build};
pub use candidates::CandidateList;
pub use corpus::{CorpusFormat, CorpusRow, parse_corpus};
pub use embedded::{SEED_WORDS, SEED_WORDS_COUNT};

use crate::core::keyboard::is_keyboard_jamo;

/// Candidate list of `length` jamo built from the embedded seed corpus
#[must_use]
pub fn seed_candidates(length: usize) -> CandidateList {
    let rows = SEED_WORDS.iter().map(|&w| CorpusRow::new(w, 1)).collect();
    build(rows, &[length], is_keyboard_jamo, BuildOptions::default())
        .remove(&length)
        .map(|built| built.list)
        .unwrap_or_default()
}
