//! Wordlist build command
//!
//! Reads a corpus file, runs the builder for the requested lengths and writes
//! one JSON candidate list per length. Every list is built and serialized
//! before the first file is written, so a failing run leaves no partial set.

use crate::core::keyboard::is_keyboard_jamo;
use crate::wordlists::builder::{BuildOptions, LengthReport, LengthSelector, build};
use crate::wordlists::corpus::{CorpusFormat, parse_corpus};
use crate::wordlists::loader::{LoadError, default_file_name, to_json, write_json};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a build run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub input: PathBuf,
    pub format: CorpusFormat,
    pub lengths: LengthSelector,
    pub options: BuildOptions,
    /// Explicit output file; only honoured when building a single length
    pub out: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub show_progress: bool,
}

impl BuildConfig {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: CorpusFormat::default(),
            lengths: LengthSelector::default(),
            options: BuildOptions::default(),
            out: None,
            out_dir: PathBuf::from("public"),
            show_progress: false,
        }
    }

    /// Where the list for `length` is written
    #[must_use]
    pub fn output_path(&self, length: usize) -> PathBuf {
        let single = matches!(self.lengths, LengthSelector::Single(_));
        match &self.out {
            Some(out) if single => out.clone(),
            _ => self.out_dir.join(default_file_name(length, single)),
        }
    }
}

/// One written list
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub path: PathBuf,
    pub entries: usize,
    pub report: LengthReport,
}

/// Result of a build run
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Rows parsed from the corpus, before frequency filters
    pub corpus_rows: usize,
    pub malformed: usize,
    pub header_skipped: bool,
    pub outputs: Vec<BuildOutput>,
}

/// Why a build run stopped
#[derive(Debug)]
pub enum BuildError {
    MissingInput { path: PathBuf, source: io::Error },
    /// The corpus exists but could not be read as UTF-8 text
    UnreadableInput { path: PathBuf, source: io::Error },
    Output(LoadError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { path, source } => {
                write!(f, "Missing data file {}: {source}", path.display())
            }
            Self::UnreadableInput { path, source } => {
                write!(f, "Cannot read data file {}: {source}", path.display())
            }
            Self::Output(e) => write!(f, "Failed to write candidate list: {e}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingInput { source, .. } | Self::UnreadableInput { source, .. } => {
                Some(source)
            }
            Self::Output(e) => Some(e),
        }
    }
}

/// Run the build and write the lists
///
/// # Errors
///
/// Returns an error if the corpus cannot be read or an output cannot be
/// serialized or written. Nothing is written when the corpus is unreadable.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary, BuildError> {
    let raw = fs::read_to_string(&config.input).map_err(|source| {
        let path = config.input.clone();
        if source.kind() == io::ErrorKind::NotFound {
            BuildError::MissingInput { path, source }
        } else {
            BuildError::UnreadableInput { path, source }
        }
    })?;

    let parsed = parse_corpus(&raw, config.format);
    log::info!(
        "{}: {} rows ({} format), {} malformed{}",
        config.input.display(),
        parsed.rows.len(),
        config.format,
        parsed.malformed,
        if parsed.header_skipped { ", header skipped" } else { "" },
    );

    let corpus_rows = parsed.rows.len();
    let lengths = config.lengths.lengths();

    let spinner = config.show_progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Decomposing {corpus_rows} words..."));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let built = build(parsed.rows, &lengths, is_keyboard_jamo, config.options);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    // Serialize everything first; only then touch the filesystem
    let mut pending = Vec::with_capacity(built.len());
    for (length, built) in built {
        let path = config.output_path(length);
        let json = to_json(&built.list).map_err(|source| {
            BuildError::Output(LoadError::Json {
                path: path.clone(),
                source,
            })
        })?;
        pending.push((path, json, built));
    }

    let mut outputs = Vec::with_capacity(pending.len());
    for (path, json, built) in pending {
        write_json(&path, &json).map_err(BuildError::Output)?;
        log::info!("Wrote {} entries to {}", built.list.len(), path.display());
        outputs.push(BuildOutput {
            path,
            entries: built.list.len(),
            report: built.report,
        });
    }

    Ok(BuildSummary {
        corpus_rows,
        malformed: parsed.malformed,
        header_skipped: parsed.header_skipped,
        outputs,
    })
}
