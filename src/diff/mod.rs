//! Unified-diff parsing for the pull-request viewer.
//!
//! Turns the diff text stored on a file change into an ordered list of
//! classified lines (hunk header, addition, removal, context) tagged with
//! old/new line numbers, ready for row layout.
//!
//! The parser is tolerant by construction:
//! - Preamble lines (`diff --git`, `index`, `---`, `+++`) are skipped
//! - Malformed hunk headers are emitted but do not move the counters
//! - Unmarked lines are passed through as context
//! - Empty input produces no lines

mod api;
mod helpers;
mod parser;

#[cfg(test)]
mod tests;

// Re-export public API
pub use api::{DiffLine, DiffLineKind, LineCounts, line_counts};
pub use parser::parse_diff;
