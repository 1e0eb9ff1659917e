//! Public types for parsed diff output.

use serde::{Deserialize, Serialize};

/// Classification of a parsed diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    /// A `@@ ... @@` hunk header.
    Hunk,
    /// A line present only in the new file.
    Add,
    /// A line present only in the old file.
    Remove,
    /// A line present in both files.
    Context,
}

impl DiffLineKind {
    /// The single-character diff marker used when re-rendering the line.
    pub fn marker(self) -> char {
        match self {
            DiffLineKind::Add => '+',
            DiffLineKind::Remove => '-',
            DiffLineKind::Hunk | DiffLineKind::Context => ' ',
        }
    }
}

/// A single classified line from a unified diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    pub kind: DiffLineKind,
    /// Line text without its leading marker. Hunk lines keep the raw header.
    pub content: String,
    /// Line number in the old file (remove and context lines).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<usize>,
    /// Line number in the new file (add and context lines).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<usize>,
}

impl DiffLine {
    pub fn hunk(header: &str) -> Self {
        Self {
            kind: DiffLineKind::Hunk,
            content: header.to_string(),
            old_line_number: None,
            new_line_number: None,
        }
    }

    pub fn add(content: &str, new_line: usize) -> Self {
        Self {
            kind: DiffLineKind::Add,
            content: content.to_string(),
            old_line_number: None,
            new_line_number: Some(new_line),
        }
    }

    pub fn remove(content: &str, old_line: usize) -> Self {
        Self {
            kind: DiffLineKind::Remove,
            content: content.to_string(),
            old_line_number: Some(old_line),
            new_line_number: None,
        }
    }

    pub fn context(content: &str, old_line: usize, new_line: usize) -> Self {
        Self {
            kind: DiffLineKind::Context,
            content: content.to_string(),
            old_line_number: Some(old_line),
            new_line_number: Some(new_line),
        }
    }
}

/// Tally of parsed records by kind.
///
/// This describes what the parser saw, not what the ingestion process
/// recorded; file and pull-request totals always come from the stored
/// counts on [`crate::model::FileChange`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub hunks: usize,
    pub added: usize,
    pub removed: usize,
    pub context: usize,
}

/// Count parsed records by kind.
pub fn line_counts(lines: &[DiffLine]) -> LineCounts {
    lines.iter().fold(LineCounts::default(), |mut counts, line| {
        match line.kind {
            DiffLineKind::Hunk => counts.hunks += 1,
            DiffLineKind::Add => counts.added += 1,
            DiffLineKind::Remove => counts.removed += 1,
            DiffLineKind::Context => counts.context += 1,
        }
        counts
    })
}
