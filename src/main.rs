//! Jamo Wordle - CLI
//!
//! Korean Wordle played on decomposed jamo: inspect words, score guesses,
//! build candidate lists from a corpus and play in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jamo_wordle::{
    commands::{
        BuildConfig, ImportConfig, PlayConfig, analyze_word, compare_words, run_build, run_import,
        run_play,
    },
    output::{
        print_analysis_result, print_build_summary, print_comparison_result, print_import_summary,
    },
    wordlists::{BuildOptions, CorpusFormat, LengthSelector, SUPPORTED_LENGTHS},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jamo-wordle",
    about = "Korean Wordle on decomposed jamo, with an offline wordlist builder",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Word length in jamo: 6, 7 or 8
        #[arg(short, long, default_value = "6", value_parser = parse_play_length)]
        len: usize,

        /// Candidate list JSON; the built-in seed words are used if omitted
        #[arg(long)]
        list: Option<PathBuf>,

        /// RNG seed for a reproducible answer
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how a word decomposes into jamo
    Decompose {
        /// Word to decompose
        word: String,
    },

    /// Score a guess against an answer
    Evaluate {
        /// The guess (syllables or jamo)
        guess: String,

        /// The answer (syllables or jamo)
        answer: String,
    },

    /// Build candidate lists from a word corpus
    Build {
        /// Corpus file
        #[arg(short, long, default_value = "data/raw_words.txt")]
        input: PathBuf,

        /// Corpus format: lines, csv or tsv
        #[arg(short, long, default_value = "lines")]
        format: CorpusFormat,

        /// Jamo length to build: 6, 7, 8 or all
        #[arg(short, long, default_value = "6")]
        len: LengthSelector,

        /// Drop rows with a count below this (0 = off)
        #[arg(long)]
        min_count: Option<u64>,

        /// Keep only the N most frequent rows (0 = off)
        #[arg(long)]
        top_n: Option<usize>,

        /// Output file (single length only)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output directory for default file names
        #[arg(long, default_value = "public")]
        out_dir: PathBuf,
    },

    /// Convert a Hunspell .dic file into a word corpus
    Import {
        /// Dictionary file
        #[arg(short, long, default_value = "data/ko.dic")]
        dic: PathBuf,

        /// Corpus file to write
        #[arg(short, long, default_value = "data/raw_words.txt")]
        output: PathBuf,
    },
}

fn parse_play_length(s: &str) -> Result<usize, String> {
    let len: usize = s.trim().parse().map_err(|_| format!("'{s}' is not a number"))?;
    if SUPPORTED_LENGTHS.contains(&len) {
        Ok(len)
    } else {
        Err(format!("Unsupported length {len}, expected 6, 7 or 8"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        len: 6,
        list: None,
        seed: None,
    });

    match command {
        Commands::Play { len, list, seed } => run_play_command(len, list, seed),
        Commands::Decompose { word } => run_decompose_command(&word),
        Commands::Evaluate { guess, answer } => {
            print_comparison_result(&compare_words(&guess, &answer));
            Ok(())
        }
        Commands::Build {
            input,
            format,
            len,
            min_count,
            top_n,
            out,
            out_dir,
        } => {
            let config = BuildConfig {
                input,
                format,
                lengths: len,
                options: BuildOptions { min_count, top_n },
                out,
                out_dir,
                show_progress: true,
            };
            run_build_command(&config)
        }
        Commands::Import { dic, output } => {
            let summary = run_import(&ImportConfig { dic, output })?;
            print_import_summary(&summary);
            Ok(())
        }
    }
}

fn run_decompose_command(word: &str) -> Result<()> {
    let result = analyze_word(word).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_build_command(config: &BuildConfig) -> Result<()> {
    if config.out.is_some() && config.lengths == LengthSelector::All {
        log::warn!("--out is ignored with --len all; writing to {}", config.out_dir.display());
    }

    let summary = run_build(config)
        .with_context(|| format!("Build from {} failed", config.input.display()))?;
    print_build_summary(&summary);

    if summary.outputs.iter().all(|o| o.entries == 0) {
        log::warn!("No words survived filtering; check the corpus and --len");
    }
    Ok(())
}

fn run_play_command(len: usize, list: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let config = PlayConfig {
        length: len,
        list,
        seed,
    };
    run_play(&config).map_err(|e| anyhow::anyhow!(e))
}
