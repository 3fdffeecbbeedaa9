//! Per-position feedback for a guess
//!
//! Each position of a guess is classified as:
//! - `Correct` (the same jamo sits at the same position in the answer)
//! - `Present` (the jamo occurs elsewhere in the answer, and has not already
//!   been accounted for by a correct or earlier present position)
//! - `Absent` (everything else)

use super::JamoWord;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Classification of a single guess position
///
/// Ordered by how much it reveals: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji tile for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback character (`G`/`Y`/`-` or an emoji tile)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Score `guess` against `answer`
///
/// Tokens are compared for equality only, so this works on decomposed jamo as
/// well as on any other sequence. The result has `max(guess.len(), answer.len())`
/// entries; positions past the end of either side are `Absent`.
///
/// Duplicates are resolved left to right: a repeated guess token is marked
/// `Present` only while the answer still has unmatched copies of it.
///
/// # Examples
/// ```
/// use jamo_wordle::core::{Feedback, evaluate};
///
/// let answer: Vec<char> = "ㄱㅏㄴㅏ".chars().collect();
/// let guess: Vec<char> = "ㅏㅏㄴㅏ".chars().collect();
///
/// assert_eq!(
///     evaluate(&guess, &answer),
///     vec![Feedback::Absent, Feedback::Correct, Feedback::Correct, Feedback::Correct]
/// );
/// ```
#[must_use]
pub fn evaluate<T: Eq + Hash>(guess: &[T], answer: &[T]) -> Vec<Feedback> {
    let mut result = vec![Feedback::Absent; guess.len().max(answer.len())];

    let mut answer_available: FxHashMap<&T, usize> = FxHashMap::default();
    for token in answer {
        *answer_available.entry(token).or_insert(0) += 1;
    }

    // First pass: exact position matches
    for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            result[i] = Feedback::Correct;
            if let Some(count) = answer_available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: displaced matches from what is left
    for (i, token) in guess.iter().enumerate() {
        if result[i] == Feedback::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(token)
            && *count > 0
        {
            result[i] = Feedback::Present;
            *count -= 1;
        }
    }

    result
}

/// Feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Evaluation(Vec<Feedback>);

impl Evaluation {
    /// Wrap raw per-position feedback
    #[must_use]
    pub const fn new(feedback: Vec<Feedback>) -> Self {
        Self(feedback)
    }

    /// Evaluate one validated word against another
    ///
    /// # Examples
    /// ```
    /// use jamo_wordle::core::{Evaluation, JamoWord};
    ///
    /// let guess = JamoWord::new("가나다").unwrap();
    /// let answer = JamoWord::new("ㄱㅏㄴㅏㄷㅏ").unwrap();
    /// assert!(Evaluation::calculate(&guess, &answer).is_solved());
    /// ```
    #[must_use]
    pub fn calculate(guess: &JamoWord, answer: &JamoWord) -> Self {
        Self(evaluate(guess.jamo(), answer.jamo()))
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }

    /// Every position is correct (and there is at least one)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Feedback::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Feedback::Present)
    }

    fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Render as emoji tiles, e.g. "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }

    /// Parse a feedback string like "GY-" or "🟩🟨⬜"
    ///
    /// # Examples
    /// ```
    /// use jamo_wordle::core::Evaluation;
    ///
    /// let a = Evaluation::from_str("GY-").unwrap();
    /// let b = Evaluation::from_str("🟩🟨⬜").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // FromStr is implemented below as well
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars().map(Feedback::from_char).collect::<Option<Vec<_>>>().map(Self)
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
