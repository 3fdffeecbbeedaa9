//! Word analysis commands
//!
//! Shows how a word breaks into jamo and how one word scores against another.

use crate::core::jamo::decompose_chars;
use crate::core::keyboard::first_unreachable;
use crate::core::{Feedback, Syllable, decompose, evaluate};

/// One input character and the jamo it contributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharBreakdown {
    pub source: char,
    pub jamo: String,
    /// False for characters passed through unchanged
    pub is_syllable: bool,
}

/// Result of decomposing a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub text: String,
    pub jamo: String,
    pub jamo_len: usize,
    pub chars: Vec<CharBreakdown>,
    /// First jamo with no key on the two-set layout
    pub unreachable: Option<char>,
}

impl AnalysisResult {
    /// Whether the word could be typed as a guess
    #[must_use]
    pub const fn is_typeable(&self) -> bool {
        self.unreachable.is_none()
    }
}

/// Decompose `text` and describe every character
///
/// # Errors
///
/// Returns an error if the input is blank.
pub fn analyze_word(text: &str) -> Result<AnalysisResult, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Nothing to decompose".to_string());
    }

    let chars = text
        .chars()
        .map(|c| match Syllable::from_char(c) {
            Some(s) => CharBreakdown {
                source: c,
                jamo: s.jamo().collect(),
                is_syllable: true,
            },
            None => CharBreakdown {
                source: c,
                jamo: c.to_string(),
                is_syllable: false,
            },
        })
        .collect();

    let jamo = decompose(text);
    Ok(AnalysisResult {
        text: text.to_string(),
        jamo_len: jamo.chars().count(),
        unreachable: first_unreachable(&jamo),
        jamo,
        chars,
    })
}

/// Result of scoring one word against another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub guess: Vec<char>,
    pub answer: Vec<char>,
    pub feedback: Vec<Feedback>,
}

impl ComparisonResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.feedback.is_empty() && self.feedback.iter().all(|&f| f == Feedback::Correct)
    }
}

/// Score `guess` against `answer` jamo by jamo
///
/// Either side may be syllables or jamo. Lengths are not required to match.
#[must_use]
pub fn compare_words(guess: &str, answer: &str) -> ComparisonResult {
    let guess = decompose_chars(guess.trim());
    let answer = decompose_chars(answer.trim());
    let feedback = evaluate(&guess, &answer);
    ComparisonResult {
        guess,
        answer,
        feedback,
    }
}
