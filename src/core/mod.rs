//! Core domain types for jamo Wordle
//!
//! Pure, dependency-free building blocks: syllable decomposition, keyboard
//! reachability, validated jamo words and guess feedback.

mod feedback;
pub mod jamo;
pub mod keyboard;
mod word;

pub use feedback::{Evaluation, Feedback, evaluate};
pub use jamo::{Syllable, decompose, jamo_len};
pub use keyboard::{KEYBOARD_JAMO, is_reachable};
pub use word::{JamoWord, JamoWordError};
