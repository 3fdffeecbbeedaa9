//! Dictionary import command
//!
//! Converts a Hunspell `.dic` file into a `lines` corpus for the builder. An
//! existing corpus at the output path is kept as `<stem>.prev.txt`.

use crate::wordlists::dictionary::parse_dic;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration for an import run
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub dic: PathBuf,
    pub output: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            dic: PathBuf::from("data/ko.dic"),
            output: PathBuf::from("data/raw_words.txt"),
        }
    }
}

/// Result of an import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub considered: usize,
    pub kept: usize,
    pub output: PathBuf,
    /// Where the previous corpus was copied before being overwritten, if there was one
    pub backup: Option<PathBuf>,
}

/// Why an import run stopped
#[derive(Debug)]
pub enum ImportError {
    MissingDictionary { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDictionary { path, source } => {
                write!(f, "Missing dictionary {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingDictionary { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

/// Backup location for an existing corpus: `raw_words.txt` -> `raw_words.prev.txt`
#[must_use]
pub fn backup_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map_or_else(|| "raw_words".into(), |s| s.to_string_lossy());
    let name = match output.extension() {
        Some(ext) => format!("{stem}.prev.{}", ext.to_string_lossy()),
        None => format!("{stem}.prev"),
    };
    output.with_file_name(name)
}

/// Import a dictionary into a corpus file
///
/// # Errors
///
/// Returns an error if the dictionary cannot be read or the corpus, its
/// backup or their directory cannot be written.
pub fn run_import(config: &ImportConfig) -> Result<ImportSummary, ImportError> {
    let raw = fs::read_to_string(&config.dic).map_err(|source| ImportError::MissingDictionary {
        path: config.dic.clone(),
        source,
    })?;
    let import = parse_dic(&raw);
    log::info!(
        "{}: kept {} of {} entries",
        config.dic.display(),
        import.words.len(),
        import.considered
    );

    let write_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ImportError::Write { path, source }
    };

    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err(parent))?;
    }

    let backup = if config.output.exists() {
        let backup = backup_path(&config.output);
        fs::copy(&config.output, &backup).map_err(write_err(&backup))?;
        log::info!("Backed up previous corpus to {}", backup.display());
        Some(backup)
    } else {
        None
    };

    fs::write(&config.output, import.to_corpus()).map_err(write_err(&config.output))?;

    Ok(ImportSummary {
        considered: import.considered,
        kept: import.words.len(),
        output: config.output.clone(),
        backup,
    })
}
