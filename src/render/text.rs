//! Plain-text rendering of files, pull requests, and listings.

use super::dates::{format_timestamp, relative_age};
use super::rows::{DiffRow, FileView, number_cell};
use super::status::pr_status_label;
use crate::filter::{FILTERS, PrFilter, filter_counts, filter_pull_requests};
use crate::model::{FileChange, PullRequest};
use crate::stats::{FileStats, summarize};
use chrono::{DateTime, Utc};

const BANNER: &str =
    "================================================================================";

/// Message shown in place of the table when a diff yields no lines.
pub const UNPARSED_MESSAGE: &str = "Unable to parse diff for this file";

/// Display switches for file rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the diff table; otherwise only the header and footer stats.
    pub expand_files: bool,
    /// Dump the raw diff text under the unparsed message.
    pub show_raw_on_parse_failure: bool,
    /// Maximum content characters per row (0 = unlimited).
    pub content_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            expand_files: true,
            show_raw_on_parse_failure: true,
            content_width: 0,
        }
    }
}

/// Render one file change: header, then the diff table or footer stats.
pub fn render_file(file: &FileChange, options: &RenderOptions) -> String {
    let view = FileView::build(file);
    let mut out = String::new();

    let mut header = format!("{} [{}]", view.path, view.status_label);
    for badge in FileStats::of(file).badges() {
        header.push(' ');
        header.push_str(&badge);
    }
    out.push_str(&header);
    out.push('\n');

    if !options.expand_files {
        out.push_str(&format!("  {}\n", FileStats::of(file).footer()));
        return out;
    }

    if view.parsed {
        out.push_str(&render_rows(&view.rows, options.content_width));
    } else {
        out.push_str(&format!("  {}\n", UNPARSED_MESSAGE));
        if options.show_raw_on_parse_failure && !file.diff.is_empty() {
            for line in file.diff.lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }

    out
}

/// Render table rows with right-aligned old/new number columns.
pub fn render_rows(rows: &[DiffRow], content_width: usize) -> String {
    let width = number_column_width(rows);
    let mut out = String::new();

    for row in rows {
        match row {
            DiffRow::Hunk { header, .. } => {
                out.push_str(header);
                out.push('\n');
            }
            DiffRow::Line {
                kind,
                old_line,
                new_line,
                content,
                ..
            } => {
                out.push_str(&format!(
                    "{:>w$} {:>w$} | {}{}\n",
                    number_cell(*old_line),
                    number_cell(*new_line),
                    kind.marker(),
                    truncate(content, content_width),
                    w = width
                ));
            }
        }
    }

    out
}

/// Render the pull-request detail view with its file changes.
///
/// Totals are recomputed from `files`, never read from the record.
pub fn render_pull_request(
    pr: &PullRequest,
    files: &[FileChange],
    options: &RenderOptions,
) -> String {
    let summary = summarize(files);
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("{} [{}]\n", pr.title, pr_status_label(&pr.status)));
    out.push_str(BANNER);
    out.push_str("\n\n");

    if let Some(description) = pr.description.as_deref()
        && !description.trim().is_empty()
    {
        out.push_str(description.trim_end());
        out.push_str("\n\n");
    }

    out.push_str(&format!("Author:     {}\n", pr.author.username));
    out.push_str(&format!("Created:    {}\n", format_timestamp(pr.created_at)));
    out.push_str(&format!("Updated:    {}\n", format_timestamp(pr.updated_at)));
    if let Some(commits) = pr.commits
        && commits > 0
    {
        out.push_str(&format!("Commits:    {}\n", commits));
    }
    out.push_str(&format!("Files:      {} files changed\n", summary.files_changed));
    out.push_str(&format!(
        "Repository: {} (owner: {})\n",
        pr.repository.name, pr.repository.owner.username
    ));
    out.push('\n');

    out.push_str(&format!(
        "Files Changed: {}   Additions: +{}   Deletions: -{}\n",
        summary.files_changed, summary.total_additions, summary.total_deletions
    ));
    out.push('\n');

    out.push_str("Changes\n");
    out.push_str("-------\n");
    if files.is_empty() {
        out.push_str("No files changed\n");
        return out;
    }

    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_file(file, options));
    }

    out
}

/// Render the pull-request list with filter tabs.
pub fn render_list(prs: &[PullRequest], filter: PrFilter, now: DateTime<Utc>) -> String {
    let counts = filter_counts(prs);
    let mut out = String::new();

    out.push_str("Pull Requests\n");
    out.push_str("=============\n");

    let tabs: Vec<String> = FILTERS
        .iter()
        .map(|&tab| {
            let label = format!("{} ({})", tab, counts.get(tab));
            if tab == filter {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();
    out.push_str(&tabs.join("  "));
    out.push_str("\n\n");

    let selected = filter_pull_requests(prs, filter);
    if selected.is_empty() {
        out.push_str("No pull requests found\n");
        out.push_str("Try changing your filter\n");
        return out;
    }

    for pr in selected {
        out.push_str(&format!("  {:<7} {}\n", pr_status_label(&pr.status), pr.title));

        if let Some(description) = pr.description.as_deref()
            && let Some(first_line) = description.lines().find(|l| !l.trim().is_empty())
        {
            out.push_str(&format!("          {}\n", first_line.trim()));
        }

        let mut meta = vec![
            format!("by {}", pr.author.username),
            relative_age(pr.created_at, now),
        ];
        if let Some(commits) = pr.commits
            && commits > 0
        {
            meta.push(format!("{} commits", commits));
        }
        if let Some(changes) = pr.changes
            && changes > 0
        {
            meta.push(format!("{} files changed", changes));
        }
        out.push_str(&format!("          {}\n", meta.join(", ")));
    }

    out
}

fn number_column_width(rows: &[DiffRow]) -> usize {
    rows.iter()
        .filter_map(|row| match row {
            DiffRow::Line {
                old_line, new_line, ..
            } => Some(number_cell(*old_line).len().max(number_cell(*new_line).len())),
            DiffRow::Hunk { .. } => None,
        })
        .max()
        .unwrap_or(0)
        .max(1)
}

fn truncate(content: &str, width: usize) -> &str {
    if width == 0 {
        return content;
    }
    match content.char_indices().nth(width) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
