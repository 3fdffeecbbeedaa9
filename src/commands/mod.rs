//! Command implementations

pub mod analyze;
pub mod build;
pub mod import;
pub mod play;

pub use analyze::{AnalysisResult, ComparisonResult, analyze_word, compare_words};
pub use build::{BuildConfig, BuildError, BuildSummary, run_build};
pub use import::{ImportConfig, ImportError, ImportSummary, run_import};
pub use play::{PlayConfig, run_play};
