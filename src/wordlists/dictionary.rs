//! Hunspell dictionary import
//!
//! Extracts plain Hangul words from a `.dic` file so they can be fed to the
//! builder as a `lines` corpus. The first line of a `.dic` file is usually
//! the entry count; every entry is `word/FLAGS`.

use crate::core::jamo::is_all_syllables;
use rustc_hash::FxHashSet;
use unicode_normalization::UnicodeNormalization;

/// Words extracted from a dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryImport {
    /// Unique all-syllable words in first-seen order
    pub words: Vec<String>,
    /// Non-empty entries looked at
    pub considered: usize,
}

impl DictionaryImport {
    /// The words as a newline-terminated `lines` corpus
    #[must_use]
    pub fn to_corpus(&self) -> String {
        let mut out = self.words.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

/// Parse `.dic` contents
///
/// Affix flags are stripped, entries are NFC-normalized so conjoining jamo become
/// syllables, and only entries made entirely of precomposed syllables are kept.
///
/// # Examples
/// ```
/// use jamo_wordle::wordlists::dictionary::parse_dic;
///
/// let import = parse_dic("3\n사람/N\nHTTP/X\n사람\n");
/// assert_eq!(import.words, ["사람"]);
/// assert_eq!(import.considered, 3);
/// ```
#[must_use]
pub fn parse_dic(raw: &str) -> DictionaryImport {
    let mut import = DictionaryImport::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for (i, line) in raw.lines().enumerate() {
        if i == 0 && !line.trim().is_empty() && line.trim().bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        let entry = line.split_once('/').map_or(line, |(word, _flags)| word).trim();
        if entry.is_empty() {
            continue;
        }
        import.considered += 1;

        let word: String = entry.nfc().collect();
        if !is_all_syllables(&word) || seen.contains(&word) {
            continue;
        }
        seen.insert(word.clone());
        import.words.push(word);
    }

    import
}
