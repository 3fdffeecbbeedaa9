//! Raw corpus parsing and frequency pre-filters
//!
//! Three input shapes are accepted:
//! - `lines`: one word per line, each with an implicit count of 1
//! - `csv` / `tsv`: `word,count` (or tab separated); the first row is treated
//!   as a header and skipped when its count column is not numeric

use std::fmt;
use std::str::FromStr;

/// Shape of a corpus file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorpusFormat {
    #[default]
    Lines,
    Csv,
    Tsv,
}

impl CorpusFormat {
    /// Column delimiter, if the format has columns
    #[must_use]
    pub const fn delimiter(self) -> Option<char> {
        match self {
            Self::Lines => None,
            Self::Csv => Some(','),
            Self::Tsv => Some('\t'),
        }
    }
}

impl FromStr for CorpusFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lines" => Ok(Self::Lines),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            other => Err(format!("Unknown corpus format '{other}', expected lines|csv|tsv")),
        }
    }
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lines => "lines",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        })
    }
}

/// A single corpus entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    pub word: String,
    pub count: u64,
}

impl CorpusRow {
    #[must_use]
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Parsed corpus plus what was dropped on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCorpus {
    pub rows: Vec<CorpusRow>,
    /// The first row was recognised as a header and skipped
    pub header_skipped: bool,
    /// Rows dropped for an empty word or an unparsable count
    pub malformed: usize,
}

/// Parse raw corpus text
///
/// Blank lines are ignored. Malformed rows are skipped and counted, never fatal.
///
/// # Examples
/// ```
/// use jamo_wordle::wordlists::corpus::{CorpusFormat, parse_corpus};
///
/// let parsed = parse_corpus("word,count\n사람,120\n나무,80\n", CorpusFormat::Csv);
/// assert!(parsed.header_skipped);
/// assert_eq!(parsed.rows.len(), 2);
/// assert_eq!(parsed.rows[0].count, 120);
/// ```
#[must_use]
pub fn parse_corpus(raw: &str, format: CorpusFormat) -> ParsedCorpus {
    let lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());

    let Some(delimiter) = format.delimiter() else {
        return ParsedCorpus {
            rows: lines.map(|w| CorpusRow::new(w, 1)).collect(),
            ..ParsedCorpus::default()
        };
    };

    let mut parsed = ParsedCorpus::default();
    for (i, line) in lines.enumerate() {
        let mut parts = line.split(delimiter).map(str::trim);
        let word = parts.next().unwrap_or_default();
        if word.is_empty() {
            log::debug!("row {}: empty word, skipped", i + 1);
            parsed.malformed += 1;
            continue;
        }

        // A missing count column means an implicit count of 1
        let count = match parts.next().filter(|c| !c.is_empty()) {
            None => 1,
            Some(raw_count) => match raw_count.parse::<u64>() {
                Ok(count) => count,
                Err(_) if i == 0 => {
                    log::debug!("header row detected: '{line}'");
                    parsed.header_skipped = true;
                    continue;
                }
                Err(_) => {
                    log::debug!("row {}: unparsable count '{raw_count}', skipped", i + 1);
                    parsed.malformed += 1;
                    continue;
                }
            },
        };

        parsed.rows.push(CorpusRow::new(word, count));
    }

    parsed
}

/// Keep rows with `count >= min_count`
pub fn retain_min_count(rows: &mut Vec<CorpusRow>, min_count: u64) {
    rows.retain(|r| r.count >= min_count);
}

/// Keep the `n` most frequent rows
///
/// The sort is stable, so rows with equal counts keep their input order.
pub fn retain_top_n(rows: &mut Vec<CorpusRow>, n: usize) {
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(n);
}
