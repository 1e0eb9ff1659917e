//! Addition/deletion statistics for file changes and pull requests.
//!
//! Totals are always the sum of the counts recorded on each
//! [`FileChange`]; they are never derived from the parsed diff text. A file
//! with no diff text still contributes its recorded counts.

use crate::model::FileChange;
use serde::{Deserialize, Serialize};

/// Pull-request level summary computed from its current file-change set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub files_changed: usize,
    pub total_additions: u64,
    pub total_deletions: u64,
}

impl ChangeSummary {
    /// Fold one more file change into the summary.
    pub fn add(mut self, file: &FileChange) -> Self {
        self.files_changed += 1;
        self.total_additions += u64::from(file.additions);
        self.total_deletions += u64::from(file.deletions);
        self
    }
}

/// Summarize a pull request's file changes.
///
/// Order independent; zero records give an all-zero summary.
pub fn summarize(files: &[FileChange]) -> ChangeSummary {
    files.iter().fold(ChangeSummary::default(), ChangeSummary::add)
}

/// Per-file counters shown on a file header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub additions: u32,
    pub deletions: u32,
}

impl FileStats {
    pub fn of(file: &FileChange) -> Self {
        Self {
            additions: file.additions,
            deletions: file.deletions,
        }
    }

    /// Header badge counters: `+N` and `-N`, each only when non-zero.
    pub fn badges(&self) -> Vec<String> {
        let mut badges = Vec::new();
        if self.additions > 0 {
            badges.push(format!("+{}", self.additions));
        }
        if self.deletions > 0 {
            badges.push(format!("-{}", self.deletions));
        }
        badges
    }

    /// Collapsed footer line, always shown.
    pub fn footer(&self) -> String {
        format!("{} additions  {} deletions", self.additions, self.deletions)
    }
}
