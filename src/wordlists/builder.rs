//! Offline wordlist builder
//!
//! Turns raw corpus rows into candidate lists partitioned by jamo length.
//! Per target length the pipeline is:
//! 1. pre-filter rows by minimum count and top-N frequency
//! 2. decompose every word (in parallel; order is preserved)
//! 3. keep words of exactly the target length whose jamo are all typeable
//! 4. deduplicate and sort
//!
//! The output depends only on the input rows and options, never on thread
//! scheduling, so reruns are byte-identical.

use super::candidates::CandidateList;
use super::corpus::{CorpusRow, retain_min_count, retain_top_n};
use crate::core::decompose;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Jamo lengths a game can be played at
pub const SUPPORTED_LENGTHS: [usize; 3] = [6, 7, 8];

/// Which lengths to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthSelector {
    Single(usize),
    All,
}

/// Error for a length selector that is neither a supported length nor "all"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSelectorError(pub String);

impl fmt::Display for LengthSelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid length '{}', expected 6|7|8|all", self.0)
    }
}

impl std::error::Error for LengthSelectorError {}

impl LengthSelector {
    /// Target lengths in ascending order
    #[must_use]
    pub fn lengths(self) -> Vec<usize> {
        match self {
            Self::Single(n) => vec![n],
            Self::All => SUPPORTED_LENGTHS.to_vec(),
        }
    }
}

impl Default for LengthSelector {
    fn default() -> Self {
        Self::Single(6)
    }
}

impl FromStr for LengthSelector {
    type Err = LengthSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match s.parse::<usize>() {
            Ok(n) if SUPPORTED_LENGTHS.contains(&n) => Ok(Self::Single(n)),
            _ => Err(LengthSelectorError(s.to_string())),
        }
    }
}

impl fmt::Display for LengthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::All => f.write_str("all"),
        }
    }
}

/// Frequency pre-filters applied before decomposition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Drop rows with a count below this; `Some(0)` is the same as `None`
    pub min_count: Option<u64>,
    /// Keep only this many of the most frequent rows; `Some(0)` is the same as `None`
    pub top_n: Option<usize>,
}

/// Diagnostic counters for one target length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthReport {
    pub length: usize,
    /// Rows left after the frequency pre-filters
    pub input_rows: usize,
    pub considered: usize,
    /// Unique entries written to the list
    pub kept: usize,
    pub filtered_len: usize,
    pub filtered_keyboard: usize,
    /// Entries whose jamo form was already in the list
    pub duplicates: usize,
}

/// One built list with its diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltList {
    pub list: CandidateList,
    pub report: LengthReport,
}

/// Run the pipeline for every requested length
///
/// `reachable` decides whether a single jamo can be typed; normally
/// [`crate::core::keyboard::is_keyboard_jamo`].
///
/// # Examples
/// ```
/// use jamo_wordle::core::keyboard::is_keyboard_jamo;
/// use jamo_wordle::wordlists::builder::{BuildOptions, build};
/// use jamo_wordle::wordlists::corpus::CorpusRow;
///
/// let rows = vec![CorpusRow::new("가나다", 1), CorpusRow::new("사과", 1)];
/// let built = build(rows, &[6], is_keyboard_jamo, BuildOptions::default());
///
/// assert_eq!(built[&6].list.words(), ["ㄱㅏㄴㅏㄷㅏ"]);
/// assert_eq!(built[&6].report.filtered_len, 1); // 사과 is only 4 jamo
/// ```
#[must_use]
pub fn build<F>(
    mut rows: Vec<CorpusRow>,
    lengths: &[usize],
    reachable: F,
    options: BuildOptions,
) -> BTreeMap<usize, BuiltList>
where
    F: Fn(char) -> bool,
{
    // Zero disables either filter
    if let Some(min_count) = options.min_count.filter(|&n| n > 0) {
        retain_min_count(&mut rows, min_count);
    }
    if let Some(top_n) = options.top_n.filter(|&n| n > 0) {
        retain_top_n(&mut rows, top_n);
    }

    // Decompose once, shared by every target length
    let decomposed: Vec<(String, usize)> = rows
        .par_iter()
        .map(|row| {
            let jamo = decompose(&row.word);
            let len = jamo.chars().count();
            (jamo, len)
        })
        .collect();

    lengths
        .iter()
        .map(|&length| {
            let built = build_length(&decomposed, length, &reachable);
            log::info!(
                "[len={length}] input rows: {}, considered: {}, kept: {}, filtered by length: {}, filtered by keyboard: {}, duplicates: {}",
                built.report.input_rows,
                built.report.considered,
                built.report.kept,
                built.report.filtered_len,
                built.report.filtered_keyboard,
                built.report.duplicates,
            );
            (length, built)
        })
        .collect()
}

fn build_length<F>(decomposed: &[(String, usize)], length: usize, reachable: &F) -> BuiltList
where
    F: Fn(char) -> bool,
{
    let mut report = LengthReport {
        length,
        input_rows: decomposed.len(),
        ..LengthReport::default()
    };
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for (jamo, len) in decomposed {
        report.considered += 1;

        if *len != length {
            report.filtered_len += 1;
            continue;
        }
        if !jamo.chars().all(reachable) {
            report.filtered_keyboard += 1;
            continue;
        }
        if seen.insert(jamo.as_str()) {
            report.kept += 1;
        } else {
            report.duplicates += 1;
        }
    }

    let words = seen.into_iter().map(str::to_string).collect();
    BuiltList {
        list: CandidateList::from_sorted(length, words),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keyboard::{is_keyboard_jamo, is_reachable};

    fn rows(words: &[&str]) -> Vec<CorpusRow> {
        words.iter().map(|w| CorpusRow::new(*w, 1)).collect()
    }

    #[test]
    fn length_selector_parsing() {
        assert_eq!("6".parse::<LengthSelector>(), Ok(LengthSelector::Single(6)));
        assert_eq!(" 8 ".parse::<LengthSelector>(), Ok(LengthSelector::Single(8)));
        assert_eq!("ALL".parse::<LengthSelector>(), Ok(LengthSelector::All));
        assert!("5".parse::<LengthSelector>().is_err());
        assert!("six".parse::<LengthSelector>().is_err());
        assert!("".parse::<LengthSelector>().is_err());
        assert_eq!(LengthSelector::All.lengths(), vec![6, 7, 8]);
        assert_eq!(LengthSelector::default().lengths(), vec![6]);
    }

    #[test]
    fn four_open_syllables_are_eight_jamo() {
        let built = build(rows(&["가나다라"]), &[6, 8], is_keyboard_jamo, BuildOptions::default());

        assert_eq!(built[&8].list.words(), ["ㄱㅏㄴㅏㄷㅏㄹㅏ"]);
        assert_eq!(built[&8].report.kept, 1);

        assert!(built[&6].list.is_empty());
        assert_eq!(built[&6].report.filtered_len, 1);
        assert_eq!(built[&6].report.considered, 1);
    }

    #[test]
    fn keyboard_filter_rejects_compound_vowels() {
        // 과자를 = ㄱㅘㅈㅏㄹㅡㄹ, 7 jamo but ㅘ has no key
        let built = build(rows(&["과자를", "사람이"]), &[7], is_keyboard_jamo, BuildOptions::default());
        let report = built[&7].report;

        assert_eq!(report.filtered_keyboard, 1);
        assert_eq!(report.kept, 1);
        assert_eq!(built[&7].list.words(), ["ㅅㅏㄹㅏㅁㅇㅣ"]);
    }

    #[test]
    fn duplicates_collapse() {
        // Syllable and jamo spellings of the same word
        let built = build(
            rows(&["가나다", "ㄱㅏㄴㅏㄷㅏ", "가나다"]),
            &[6],
            is_keyboard_jamo,
            BuildOptions::default(),
        );
        let report = built[&6].report;

        assert_eq!(built[&6].list.len(), 1);
        assert_eq!(report.kept, 1);
        assert_eq!(report.duplicates, 2);
        assert_eq!(report.considered, 3);
    }

    #[test]
    fn output_is_sorted_regardless_of_input_order() {
        let words = ["하나로", "가나다", "바나나", "나무가"];
        let forward = build(rows(&words), &[6], is_keyboard_jamo, BuildOptions::default());

        let mut reversed_words = words;
        reversed_words.reverse();
        let backward = build(rows(&reversed_words), &[6], is_keyboard_jamo, BuildOptions::default());

        assert_eq!(forward, backward);
        let list = forward[&6].list.words();
        assert!(list.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_entry_is_reachable_and_exact_length() {
        let corpus = rows(&["닭고기", "읽다가", "의사들", "없어서", "값비싼", "사랑해"]);
        let built = build(corpus, &SUPPORTED_LENGTHS, is_keyboard_jamo, BuildOptions::default());

        for (length, built) in &built {
            for word in built.list.words() {
                assert_eq!(word.chars().count(), *length);
                assert!(is_reachable(word), "{word}");
            }
        }
    }

    #[test]
    fn custom_reachability_predicate() {
        let only_open = |c: char| matches!(c, 'ㄱ' | 'ㄴ' | 'ㄷ' | 'ㅏ');
        let built = build(rows(&["가나다", "바나나"]), &[6], only_open, BuildOptions::default());
        assert_eq!(built[&6].list.words(), ["ㄱㅏㄴㅏㄷㅏ"]);
        assert_eq!(built[&6].report.filtered_keyboard, 1);
    }

    #[test]
    fn frequency_filters_apply_before_length() {
        let corpus = vec![
            CorpusRow::new("가나다", 1),
            CorpusRow::new("바나나", 50),
            CorpusRow::new("하나로", 20),
            CorpusRow::new("나무가", 20),
        ];
        let options = BuildOptions {
            min_count: Some(2),
            top_n: Some(2),
        };
        let built = build(corpus, &[6], is_keyboard_jamo, options);

        // 가나다 fails min_count; top 2 of the rest are 바나나 and 하나로
        assert_eq!(built[&6].report.input_rows, 2);
        assert_eq!(built[&6].list.words(), ["ㅂㅏㄴㅏㄴㅏ", "ㅎㅏㄴㅏㄹㅗ"]);
    }

    #[test]
    fn zero_frequency_filters_are_off() {
        let corpus = vec![CorpusRow::new("가나다", 1), CorpusRow::new("바나나", 0)];
        let options = BuildOptions {
            min_count: Some(0),
            top_n: Some(0),
        };
        let built = build(corpus, &[6], is_keyboard_jamo, options);

        assert_eq!(built[&6].report.input_rows, 2);
        assert_eq!(built[&6].list.words(), ["ㄱㅏㄴㅏㄷㅏ", "ㅂㅏㄴㅏㄴㅏ"]);
    }

    #[test]
    fn empty_corpus_builds_empty_lists() {
        let built = build(Vec::new(), &[6, 7], is_keyboard_jamo, BuildOptions::default());
        assert_eq!(built.len(), 2);
        assert!(built.values().all(|b| b.list.is_empty() && b.report.considered == 0));
    }
}
