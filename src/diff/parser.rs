//! Core diff parsing logic.

use super::api::DiffLine;
use super::helpers::{is_preamble_line, parse_hunk_header};

/// Line counters carried through a single scan.
#[derive(Debug, Default)]
struct ScanState {
    old_line: usize,
    new_line: usize,
}

impl ScanState {
    fn take_old(&mut self) -> usize {
        let current = self.old_line;
        self.old_line = self.old_line.saturating_add(1);
        current
    }

    fn take_new(&mut self) -> usize {
        let current = self.new_line;
        self.new_line = self.new_line.saturating_add(1);
        current
    }
}

/// Parse a unified diff for one file into classified line records.
///
/// Single forward pass. Hunk headers reset the old/new counters to the
/// header's start positions; a malformed header is still emitted but leaves
/// the counters untouched. File preamble lines are skipped, and unmarked
/// non-empty lines are passed through as context tagged with the current
/// counters without advancing them.
///
/// This never fails: unrecognized input degrades to context or is dropped.
/// Empty input yields an empty vector, which callers render as an
/// "unable to parse" state.
pub fn parse_diff(diff_text: &str) -> Vec<DiffLine> {
    let mut result = Vec::new();
    let mut state = ScanState::default();

    for raw in diff_text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        // Format: "@@ -old_start,old_len +new_start,new_len @@ optional context"
        if line.starts_with("@@") {
            result.push(DiffLine::hunk(line));
            if let Some((old_start, new_start)) = parse_hunk_header(line) {
                state.old_line = old_start;
                state.new_line = new_start;
            }
            continue;
        }

        if let Some(content) = line.strip_prefix('+')
            && !line.starts_with("+++")
        {
            result.push(DiffLine::add(content, state.take_new()));
            continue;
        }

        if let Some(content) = line.strip_prefix('-')
            && !line.starts_with("---")
        {
            result.push(DiffLine::remove(content, state.take_old()));
            continue;
        }

        if let Some(content) = line.strip_prefix(' ') {
            let old_line = state.take_old();
            let new_line = state.take_new();
            result.push(DiffLine::context(content, old_line, new_line));
            continue;
        }

        // Dialects without a leading space marker: keep the line, but do not advance.
        if !line.is_empty() && !is_preamble_line(line) {
            result.push(DiffLine::context(line, state.old_line, state.new_line));
        }
    }

    result
}
