//! Display functions for command results

use super::formatters::{create_progress_bar, emoji_grid, format_guess, keyboard_lines, tile};
use crate::commands::{AnalysisResult, BuildSummary, ComparisonResult, ImportSummary};
use crate::game::{GameStatus, MAX_ATTEMPTS, Session};
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print how a word breaks into jamo
pub fn print_analysis_result(result: &AnalysisResult) {
    header(&format!("DECOMPOSE: {}", result.text));

    println!();
    for part in &result.chars {
        if part.is_syllable {
            println!("   {}  →  {}", part.source.to_string().bright_yellow().bold(), part.jamo);
        } else {
            println!("   {}  →  {}", part.source.to_string().bright_black(), "(unchanged)".bright_black());
        }
    }

    println!("\n   Jamo:    {}", result.jamo.bright_white().bold());
    println!("   Length:  {}", result.jamo_len.to_string().bright_cyan());
    match result.unreachable {
        None => println!("   Typeable: {}", "yes".green()),
        Some(c) => println!("   Typeable: {} ('{c}' has no key)", "no".red()),
    }
}

/// Print one word scored against another
pub fn print_comparison_result(result: &ComparisonResult) {
    header("EVALUATE");

    let guess: String = result
        .guess
        .iter()
        .chain(std::iter::repeat(&' '))
        .zip(&result.feedback)
        .map(|(&c, &f)| tile(c, f).to_string())
        .collect();
    let answer: String = result.answer.iter().map(|c| format!(" {c} ")).collect();

    println!("\n   Guess:   {guess}");
    println!("   Answer:  {answer}");
    println!("   Pattern: {}", result.feedback.iter().map(|f| f.emoji()).collect::<String>());

    if result.guess.len() != result.answer.len() {
        println!(
            "\n   {}",
            format!(
                "Lengths differ ({} vs {}); extra positions are absent",
                result.guess.len(),
                result.answer.len()
            )
            .yellow()
        );
    }
    if result.is_solved() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print what a build run wrote
pub fn print_build_summary(summary: &BuildSummary) {
    header("WORDLIST BUILD");

    println!("\n📄 Corpus rows:  {}", summary.corpus_rows);
    if summary.header_skipped {
        println!("   Header row skipped");
    }
    if summary.malformed > 0 {
        println!("   Malformed rows: {}", summary.malformed.to_string().yellow());
    }

    for output in &summary.outputs {
        let r = &output.report;
        println!(
            "\n📊 {} {}",
            format!("Length {}:", r.length).bright_cyan().bold(),
            output.path.display().to_string().bright_white()
        );
        println!(
            "   Kept:       [{}] {}",
            create_progress_bar(r.kept as f64, r.considered as f64, 30).green(),
            format!("{} / {}", r.kept, r.considered).bright_yellow()
        );
        println!("   Input rows: {}", r.input_rows);
        println!("   Wrong length:   {}", r.filtered_len);
        println!("   Untypeable:     {}", r.filtered_keyboard);
        println!("   Duplicates:     {}", r.duplicates);
        if output.entries == 0 {
            println!("   {}", "⚠ Empty list written".yellow());
        }
    }
    println!();
}

/// Print what an import run wrote
pub fn print_import_summary(summary: &ImportSummary) {
    header("DICTIONARY IMPORT");

    println!(
        "\n   Kept {} of {} entries",
        summary.kept.to_string().bright_yellow().bold(),
        summary.considered
    );
    println!("   Corpus:  {}", summary.output.display());
    if let Some(backup) = &summary.backup {
        println!("   Backup:  {}", backup.display());
    }
    println!();
}

/// Print the board so far, padded with empty rows, plus the keyboard
pub fn print_board(session: &Session) {
    println!();
    for (word, evaluation) in session.guesses() {
        println!("   {}", format_guess(word, evaluation));
    }
    let empty = " · ".repeat(session.length());
    for _ in session.guesses().len()..MAX_ATTEMPTS {
        println!("   {}", empty.bright_black());
    }

    println!();
    for line in keyboard_lines(&session.key_hints()) {
        println!("   {line}");
    }
    println!();
}

/// Print the end-of-game banner and share grid
pub fn print_game_over(session: &Session) {
    let attempts = session.guesses().len();
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => println!(
            "{}",
            format!("    🎉  Solved in {attempts}/{MAX_ATTEMPTS}!  🎉").bright_green().bold()
        ),
        GameStatus::Lost | GameStatus::InProgress => println!(
            "{}",
            format!("    ❌  Out of guesses. The word was {}", session.answer()).red().bold()
        ),
    }
    println!("{}", "═".repeat(60).bright_cyan());

    let score = if session.status() == GameStatus::Won {
        attempts.to_string()
    } else {
        "X".to_string()
    };
    println!("\n  Jamo Wordle ({} jamo) {score}/{MAX_ATTEMPTS}", session.length());
    println!("{}\n", emoji_grid(session.guesses().iter().map(|(_, e)| e)));
}
