//! Jamo Wordle
//!
//! Korean Wordle played on decomposed jamo rather than whole syllables, plus
//! the offline tooling that builds its candidate word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use jamo_wordle::core::{Feedback, decompose, evaluate};
//!
//! // Syllables become jamo
//! let guess: Vec<char> = decompose("바나나").chars().collect();
//! let answer: Vec<char> = decompose("가나다").chars().collect();
//!
//! // Score the guess position by position
//! let feedback = evaluate(&guess, &answer);
//! assert_eq!(feedback.len(), 6);
//! assert_eq!(feedback[1], Feedback::Correct);
//! ```

// Core domain types
pub mod core;

// Gameplay state
pub mod game;

// Word lists and the offline builder
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
