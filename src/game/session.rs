//! A single game, owned by the caller
//!
//! The session holds the answer, the accepted word list and the guesses made
//! so far. Nothing here is global: starting a new game means building a new
//! `Session`.

use crate::core::{Evaluation, Feedback, JamoWord, JamoWordError};
use crate::wordlists::CandidateList;
use rustc_hash::FxHashMap;
use std::fmt;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Reasons a guess is refused; a refused guess does not use up an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Invalid(JamoWordError),
    WrongLength { expected: usize, actual: usize },
    NotInWordList(String),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must be {expected} jamo, got {actual}")
            }
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<JamoWordError> for GuessError {
    fn from(e: JamoWordError) -> Self {
        Self::Invalid(e)
    }
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    answer: JamoWord,
    allowed: CandidateList,
    guesses: Vec<(JamoWord, Evaluation)>,
    status: GameStatus,
}

impl Session {
    /// Start a game
    ///
    /// The answer is always accepted as a guess, even if `allowed` does not
    /// contain it.
    ///
    /// # Examples
    /// ```
    /// use jamo_wordle::core::JamoWord;
    /// use jamo_wordle::game::{GameStatus, Session};
    /// use jamo_wordle::wordlists::CandidateList;
    ///
    /// let answer = JamoWord::new("가나다").unwrap();
    /// let mut session = Session::new(answer, &CandidateList::default());
    ///
    /// let evaluation = session.submit("가나다").unwrap();
    /// assert!(evaluation.is_solved());
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn new(answer: JamoWord, allowed: &CandidateList) -> Self {
        let answer_only = CandidateList::new(answer.len(), [answer.text()]);
        let allowed = if allowed.length() == answer.len() {
            allowed.union(&answer_only)
        } else {
            answer_only
        };

        Self {
            answer,
            allowed,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    /// Submit a guess written as syllables or jamo
    ///
    /// # Errors
    ///
    /// Returns `GuessError` without consuming an attempt if the game is over,
    /// the input has untypeable jamo, has the wrong length, or is not an
    /// accepted word.
    pub fn submit(&mut self, input: &str) -> Result<&Evaluation, GuessError> {
        if self.status != GameStatus::InProgress {
            return Err(GuessError::GameOver);
        }

        let guess = JamoWord::new(input)?;
        if guess.len() != self.length() {
            return Err(GuessError::WrongLength {
                expected: self.length(),
                actual: guess.len(),
            });
        }
        if !self.allowed.contains_word(&guess) {
            return Err(GuessError::NotInWordList(guess.text().to_string()));
        }

        let evaluation = Evaluation::calculate(&guess, &self.answer);
        if evaluation.is_solved() {
            self.status = GameStatus::Won;
        } else if self.guesses.len() + 1 >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }
        self.guesses.push((guess, evaluation));

        Ok(&self.guesses[self.guesses.len() - 1].1)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Jamo length of the game
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.answer.len()
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &JamoWord {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[(JamoWord, Evaluation)] {
        &self.guesses
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Best feedback seen so far for each guessed jamo
    ///
    /// A jamo that was `Correct` anywhere stays `Correct`, even if another
    /// position marked it `Absent`.
    #[must_use]
    pub fn key_hints(&self) -> FxHashMap<char, Feedback> {
        let mut hints: FxHashMap<char, Feedback> = FxHashMap::default();
        for (word, evaluation) in &self.guesses {
            for (&c, feedback) in word.jamo().iter().zip(evaluation.iter()) {
                hints
                    .entry(c)
                    .and_modify(|best| *best = (*best).max(feedback))
                    .or_insert(feedback);
            }
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(answer: &str, allowed: &[&str]) -> Session {
        let answer = JamoWord::new(answer).unwrap();
        let allowed = CandidateList::new(
            answer.len(),
            allowed.iter().map(|w| crate::core::decompose(w)),
        );
        Session::new(answer, &allowed)
    }

    #[test]
    fn winning_guess() {
        let mut s = session("가나다", &["바나나"]);
        assert_eq!(s.status(), GameStatus::InProgress);

        let eval = s.submit("ㄱㅏㄴㅏㄷㅏ").unwrap();
        assert_eq!(eval.count_correct(), 6);
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.attempts_left(), MAX_ATTEMPTS - 1);
        assert_eq!(s.submit("바나나"), Err(GuessError::GameOver));
    }

    #[test]
    fn six_misses_lose() {
        let mut s = session("가나다", &["바나나"]);
        for turn in 1..=MAX_ATTEMPTS {
            assert_eq!(s.status(), GameStatus::InProgress, "turn {turn}");
            s.submit("바나나").unwrap();
        }
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.attempts_left(), 0);
        assert_eq!(s.guesses().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn refused_guesses_do_not_consume_attempts() {
        let mut s = session("가나다", &["바나나"]);

        assert_eq!(
            s.submit("가나"),
            Err(GuessError::WrongLength {
                expected: 6,
                actual: 4
            })
        );
        assert_eq!(
            s.submit("하나로"),
            Err(GuessError::NotInWordList("ㅎㅏㄴㅏㄹㅗ".to_string()))
        );
        assert_eq!(
            s.submit("사과"),
            Err(GuessError::Invalid(JamoWordError::Unreachable('ㅘ')))
        );
        assert_eq!(s.submit(""), Err(GuessError::Invalid(JamoWordError::Empty)));

        assert!(s.guesses().is_empty());
        assert_eq!(s.attempts_left(), MAX_ATTEMPTS);
    }

    #[test]
    fn answer_is_always_allowed() {
        let answer = JamoWord::new("나무가").unwrap();
        let mut s = Session::new(answer, &CandidateList::default());
        assert!(s.submit("나무가").unwrap().is_solved());
    }

    #[test]
    fn list_of_other_length_is_ignored() {
        let answer = JamoWord::new("가나다").unwrap();
        let other = CandidateList::new(7, ["ㅅㅏㄹㅏㅁㅇㅣ"]);
        let s = Session::new(answer, &other);
        assert_eq!(s.length(), 6);
    }

    #[test]
    fn key_hints_keep_best_feedback() {
        let mut s = session("가나다", &["바나나", "다나가"]);
        s.submit("바나나").unwrap();
        s.submit("다나가").unwrap();

        let hints = s.key_hints();
        assert_eq!(hints[&'ㅂ'], Feedback::Absent);
        assert_eq!(hints[&'ㅏ'], Feedback::Correct);
        assert_eq!(hints[&'ㄴ'], Feedback::Correct);
        assert_eq!(hints[&'ㄷ'], Feedback::Present);
        assert_eq!(hints[&'ㄱ'], Feedback::Present);
        assert!(!hints.contains_key(&'ㅎ'));
    }
}
