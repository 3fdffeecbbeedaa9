//! Keyboard-reachable jamo words
//!
//! A `JamoWord` is the unit of gameplay: the decomposed form of a guess or an
//! answer, guaranteed to contain only jamo the two-set keyboard can type.

use super::jamo::decompose_chars;
use super::keyboard::is_keyboard_jamo;
use std::fmt;

/// A non-empty sequence of keyboard-reachable compatibility jamo
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JamoWord {
    text: String,
    jamo: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JamoWordError {
    Empty,
    /// The decomposition contains a character with no key on the keyboard
    Unreachable(char),
}

impl fmt::Display for JamoWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::Unreachable(c) => {
                write!(f, "'{c}' cannot be typed on a two-set keyboard")
            }
        }
    }
}

impl std::error::Error for JamoWordError {}

impl JamoWord {
    /// Create a word from syllables, jamo, or a mix of both
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `JamoWordError` if:
    /// - The input is empty
    /// - Any decomposed character is not on the two-set keyboard
    ///
    /// # Examples
    /// ```
    /// use jamo_wordle::core::JamoWord;
    ///
    /// let word = JamoWord::new("한글").unwrap();
    /// assert_eq!(word.text(), "ㅎㅏㄴㄱㅡㄹ");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(JamoWord::new("사과").is_err()); // ㅘ has no key
    /// ```
    pub fn new(text: &str) -> Result<Self, JamoWordError> {
        let jamo = decompose_chars(text.trim());

        if jamo.is_empty() {
            return Err(JamoWordError::Empty);
        }
        if let Some(&c) = jamo.iter().find(|&&c| !is_keyboard_jamo(c)) {
            return Err(JamoWordError::Unreachable(c));
        }

        Ok(Self {
            text: jamo.iter().collect(),
            jamo,
        })
    }

    /// The word as a jamo string
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn jamo(&self) -> &[char] {
        &self.jamo
    }

    /// Number of jamo
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.jamo.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jamo.is_empty()
    }
}

impl fmt::Display for JamoWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
