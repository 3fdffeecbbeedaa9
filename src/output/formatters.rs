//! Formatting utilities for terminal output

use crate::core::keyboard::KEYBOARD_ROWS;
use crate::core::{Evaluation, Feedback, JamoWord};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// One jamo as a colored tile
#[must_use]
pub fn tile(c: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {c} ");
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// A guess as a row of colored tiles
#[must_use]
pub fn format_guess(word: &JamoWord, evaluation: &Evaluation) -> String {
    word.jamo()
        .iter()
        .zip(evaluation.iter())
        .map(|(&c, feedback)| tile(c, feedback).to_string())
        .collect()
}

/// One key, colored by the best feedback seen for it
#[must_use]
pub fn format_key(c: char, hint: Option<Feedback>) -> ColoredString {
    let text = format!(" {c} ");
    match hint {
        Some(feedback) => tile(c, feedback),
        None => text.normal(),
    }
}

/// Keyboard rows with hints applied, each row indented like the physical layout
#[must_use]
pub fn keyboard_lines(hints: &FxHashMap<char, Feedback>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .iter()
                .map(|&c| format_key(c, hints.get(&c).copied()).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i.min(2) * 2))
        })
        .collect()
}

/// Emoji grid of every guess, one line per guess
#[must_use]
pub fn emoji_grid<'a, I>(evaluations: I) -> String
where
    I: IntoIterator<Item = &'a Evaluation>,
{
    evaluations
        .into_iter()
        .map(Evaluation::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
