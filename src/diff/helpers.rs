//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Hunk header start positions: `@@ -<old_start>... +<new_start>...`.
///
/// Only the two start numbers are captured; counts and any trailing
/// section heading are ignored.
static HUNK_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@@ -(\d+).*?\+(\d+)").expect("Invalid hunk header regex"));

/// Preamble prefixes that are never rendered as fallback context.
const PREAMBLE_PREFIXES: &[&str] = &["---", "+++", "diff", "index"];

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// Returns (old_start, new_start) or None if the header is malformed or a
/// start number does not fit in `usize`.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let captures = HUNK_HEADER_REGEX.captures(line)?;

    let old_start = captures.get(1)?.as_str().parse().ok()?;
    let new_start = captures.get(2)?.as_str().parse().ok()?;

    Some((old_start, new_start))
}

/// Whether a line belongs to the file preamble (`diff --git`, `index`, `---`, `+++`).
pub(super) fn is_preamble_line(line: &str) -> bool {
    PREAMBLE_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}
