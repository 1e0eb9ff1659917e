//! Row layout for parsed diff lines.
//!
//! Hunk headers span the full row; every other line gets an old-number
//! cell, a new-number cell, and a content cell.

use super::status::{row_style_class, status_label, status_style_class};
use crate::diff::{DiffLine, DiffLineKind, parse_diff};
use crate::model::FileChange;
use crate::stats::FileStats;
use serde::Serialize;

/// A single rendered row of a file's diff table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "lowercase")]
pub enum DiffRow {
    /// Full-width hunk header.
    Hunk {
        header: String,
        style: &'static str,
    },
    /// Numbered add/remove/context line.
    #[serde(rename_all = "camelCase")]
    Line {
        kind: DiffLineKind,
        old_line: Option<usize>,
        new_line: Option<usize>,
        content: String,
        style: &'static str,
    },
}

/// Lay out parsed lines as table rows.
pub fn layout_rows(lines: &[DiffLine]) -> Vec<DiffRow> {
    lines
        .iter()
        .map(|line| match line.kind {
            DiffLineKind::Hunk => DiffRow::Hunk {
                header: line.content.clone(),
                style: row_style_class(DiffLineKind::Hunk),
            },
            kind => DiffRow::Line {
                kind,
                old_line: line.old_line_number,
                new_line: line.new_line_number,
                content: line.content.clone(),
                style: row_style_class(kind),
            },
        })
        .collect()
}

/// Text for a line-number cell. Absent and zero numbers render blank.
pub fn number_cell(number: Option<usize>) -> String {
    match number {
        Some(n) if n > 0 => n.to_string(),
        _ => String::new(),
    }
}

/// Everything a renderer needs for one file change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView<'a> {
    pub id: &'a str,
    pub path: &'a str,
    pub status: &'a str,
    pub status_label: &'a str,
    pub status_style: &'static str,
    pub additions: u32,
    pub deletions: u32,
    /// False when the diff produced no lines and the fallback should show.
    pub parsed: bool,
    pub rows: Vec<DiffRow>,
}

impl<'a> FileView<'a> {
    /// Parse and lay out one file change.
    pub fn build(file: &'a FileChange) -> Self {
        let rows = layout_rows(&parse_diff(&file.diff));
        let stats = FileStats::of(file);
        Self {
            id: &file.id,
            path: &file.path,
            status: file.status.as_str(),
            status_label: status_label(&file.status),
            status_style: status_style_class(&file.status),
            additions: stats.additions,
            deletions: stats.deletions,
            parsed: !rows.is_empty(),
            rows,
        }
    }
}
