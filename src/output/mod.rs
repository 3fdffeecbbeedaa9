//! Terminal output formatting
//!
//! Display utilities for CLI results and the text game board.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_board, print_build_summary, print_comparison_result,
    print_game_over, print_import_summary,
};
