//! Status badges and style tokens.
//!
//! All mappings are total: unrecognized statuses get a neutral default
//! instead of an error.

use crate::diff::DiffLineKind;
use crate::model::{FileStatus, PrStatus};

/// Neutral style token for unrecognized file statuses.
pub const NEUTRAL_FILE_STYLE: &str = "text-gray-600 bg-gray-50";

/// Neutral style token for unrecognized pull-request statuses.
pub const NEUTRAL_PR_STYLE: &str = "text-gray-600 bg-gray-50 border border-gray-200";

/// Badge text for a file status.
///
/// Unknown statuses show their raw value (or `Unknown` when blank).
pub fn status_label(status: &FileStatus) -> &str {
    match status {
        FileStatus::Added => "New",
        FileStatus::Modified => "Modified",
        FileStatus::Deleted => "Deleted",
        FileStatus::Other(raw) if raw.trim().is_empty() => "Unknown",
        FileStatus::Other(raw) => raw,
    }
}

/// Badge style token for a file status.
pub fn status_style_class(status: &FileStatus) -> &'static str {
    match status {
        FileStatus::Added => "text-green-600 bg-green-50",
        FileStatus::Modified => "text-blue-600 bg-blue-50",
        FileStatus::Deleted => "text-red-600 bg-red-50",
        FileStatus::Other(_) => NEUTRAL_FILE_STYLE,
    }
}

/// Badge text for a pull-request status.
pub fn pr_status_label(status: &PrStatus) -> &str {
    match status {
        PrStatus::Other(raw) if raw.trim().is_empty() => "UNKNOWN",
        other => other.as_str(),
    }
}

/// Badge style token for a pull-request status.
pub fn pr_status_style_class(status: &PrStatus) -> &'static str {
    match status {
        PrStatus::Open => "text-green-600 bg-green-50 border border-green-200",
        PrStatus::Merged => "text-purple-600 bg-purple-50 border border-purple-200",
        PrStatus::Closed => "text-red-600 bg-red-50 border border-red-200",
        PrStatus::Other(_) => NEUTRAL_PR_STYLE,
    }
}

/// Row style token for a diff line kind.
pub fn row_style_class(kind: DiffLineKind) -> &'static str {
    match kind {
        DiffLineKind::Hunk => "bg-blue-50 text-blue-700",
        DiffLineKind::Add => "bg-green-50 text-green-800",
        DiffLineKind::Remove => "bg-red-50 text-red-800",
        DiffLineKind::Context => "bg-gray-50 text-gray-600",
    }
}
