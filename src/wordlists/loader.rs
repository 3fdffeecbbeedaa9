//! Candidate list files
//!
//! Each list is stored as a pretty-printed JSON array of jamo strings, one
//! file per length (`allowed-7.json`, ...).

use super::candidates::CandidateList;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error reading or writing a candidate list file
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "{}: invalid candidate list: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Default file name for a list of `length` jamo
///
/// Length 6 is the classic mode and gets the unsuffixed `allowed.json` when it
/// is the only list being written.
#[must_use]
pub fn default_file_name(length: usize, single: bool) -> String {
    if single && length == 6 {
        "allowed.json".to_string()
    } else {
        format!("allowed-{length}.json")
    }
}

/// Serialize a list exactly as it is written to disk
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn to_json(list: &CandidateList) -> serde_json::Result<String> {
    serde_json::to_string_pretty(list.words())
}

/// Load a candidate list of `length` jamo from a JSON file
///
/// Entries of the wrong length or with untypeable jamo are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of strings.
pub fn load_candidates<P: AsRef<Path>>(path: P, length: usize) -> Result<CandidateList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<String> = serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let total = entries.len();
    let list = CandidateList::new(length, entries);
    if list.len() < total {
        log::warn!(
            "{}: skipped {} entries that are not {length}-jamo typeable words",
            path.display(),
            total - list.len()
        );
    }
    Ok(list)
}

/// Write already-serialized JSON, creating parent directories
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_json(path: &Path, json: &str) -> Result<(), LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, json).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("jamo_wordle_loader_{}_{name}", std::process::id()))
    }

    #[test]
    fn default_file_names() {
        assert_eq!(default_file_name(6, true), "allowed.json");
        assert_eq!(default_file_name(6, false), "allowed-6.json");
        assert_eq!(default_file_name(8, true), "allowed-8.json");
    }

    #[test]
    fn json_is_pretty_array() {
        let list = CandidateList::new(6, ["ㄴㅏㅁㅜㄱㅏ", "ㄱㅏㄴㅏㄷㅏ"]);
        assert_eq!(to_json(&list).unwrap(), "[\n  \"ㄱㅏㄴㅏㄷㅏ\",\n  \"ㄴㅏㅁㅜㄱㅏ\"\n]");
        assert_eq!(to_json(&CandidateList::default()).unwrap(), "[]");
    }

    #[test]
    fn write_then_load() {
        let path = temp_path("nested").join("allowed.json");
        let list = CandidateList::new(6, ["ㄱㅏㄴㅏㄷㅏ", "ㅂㅏㄴㅏㄴㅏ"]);

        write_json(&path, &to_json(&list).unwrap()).unwrap();
        let loaded = load_candidates(&path, 6).unwrap();
        assert_eq!(loaded, list);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn load_skips_invalid_entries() {
        let path = temp_path("invalid.json");
        fs::write(&path, r#"["ㄱㅏㄴㅏㄷㅏ", "ㄱㅏ", "ㄱㅘㄴㅏㄷㅏ", "ㄱㅏㄴㅏㄷㅏ"]"#).unwrap();

        let loaded = load_candidates(&path, 6).unwrap();
        assert_eq!(loaded.words(), ["ㄱㅏㄴㅏㄷㅏ"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_candidates(temp_path("missing.json"), 6).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_malformed_json_is_json_error() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let err = load_candidates(&path, 6).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("invalid candidate list"));

        fs::remove_file(&path).unwrap();
    }
}
