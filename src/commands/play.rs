//! Text game mode
//!
//! Plays jamo Wordle on the terminal: guesses are typed as syllables or jamo,
//! tiles and keyboard hints are printed after every turn.

use crate::core::JamoWord;
use crate::game::{GameStatus, Session};
use crate::output::{print_board, print_game_over};
use crate::wordlists::loader::{LoadError, load_candidates};
use crate::wordlists::{CandidateList, seed_candidates};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use std::path::PathBuf;

/// Configuration for the text game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    pub length: usize,
    /// Candidate list file; the embedded seed corpus is used when absent
    pub list: Option<PathBuf>,
    /// Fixed RNG seed for reproducible answers
    pub seed: Option<u64>,
}

/// Load the list a game draws answers from
///
/// # Errors
///
/// Returns an error if `list` is set and the file cannot be loaded.
pub fn load_play_list(config: &PlayConfig) -> Result<CandidateList, LoadError> {
    match &config.list {
        Some(path) => load_candidates(path, config.length),
        None => Ok(seed_candidates(config.length)),
    }
}

/// Start a game with a random answer from `list`
///
/// Returns `None` when the list is empty.
pub fn new_session<R: Rng + ?Sized>(list: &CandidateList, rng: &mut R) -> Option<Session> {
    let answer = list.choose(rng)?;
    let answer = JamoWord::new(answer).ok()?;
    Some(Session::new(answer, list))
}

/// Run the interactive text game
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or is empty, or on an
/// I/O error reading user input.
pub fn run_play(config: &PlayConfig) -> Result<(), String> {
    let list = load_play_list(config).map_err(|e| e.to_string())?;
    if list.is_empty() {
        return Err(format!("No {}-jamo words available to play", config.length));
    }
    log::debug!("Playing with {} candidates of length {}", list.len(), config.length);

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Jamo Wordle - Text Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-jamo word. Type syllables (가나다) or jamo (ㄱㅏㄴㅏㄷㅏ).",
        config.length
    );
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    loop {
        let mut session =
            new_session(&list, &mut rng).ok_or_else(|| "No valid answer in word list".to_string())?;

        while session.status() == GameStatus::InProgress {
            print_board(&session);

            let Some(input) = get_user_input(&format!("Guess ({} left)", session.attempts_left()))?
            else {
                return Ok(());
            };

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\nThe word was {}", session.answer().to_string().bright_yellow());
                    println!("🔄 New game started!\n");
                    break;
                }
                guess => {
                    if let Err(e) = session.submit(guess) {
                        println!("❌ {e}");
                    }
                }
            }
        }

        if session.status() == GameStatus::InProgress {
            continue;
        }

        print_board(&session);
        print_game_over(&session);

        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sessions_repeat() {
        let list = seed_candidates(6);
        let a = new_session(&list, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = new_session(&list, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.answer(), b.answer());
        assert!(list.contains_word(a.answer()));
    }

    #[test]
    fn empty_list_has_no_session() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(new_session(&CandidateList::default(), &mut rng).is_none());
    }

    #[test]
    fn default_list_is_seed_corpus() {
        let config = PlayConfig {
            length: 7,
            ..PlayConfig::default()
        };
        let list = load_play_list(&config).unwrap();
        assert_eq!(list, seed_candidates(7));
    }

    #[test]
    fn missing_list_file_is_an_error() {
        let config = PlayConfig {
            length: 6,
            list: Some(PathBuf::from("definitely/not/here.json")),
            seed: None,
        };
        assert!(matches!(load_play_list(&config), Err(LoadError::Io { .. })));
    }
}
