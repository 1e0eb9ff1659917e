//! Selection of pull requests by status and file changes by path.
//!
//! - Status filter tabs (ALL/OPEN/MERGED/CLOSED) with per-tab counts
//! - Path globs selecting which file changes to render

use crate::error::{PrDiffError, Result};
use crate::model::{FileChange, PrStatus, PullRequest};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// All filter tabs in display order.
pub const FILTERS: &[PrFilter] = &[
    PrFilter::All,
    PrFilter::Open,
    PrFilter::Merged,
    PrFilter::Closed,
];

/// Status filter for the pull-request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PrFilter {
    /// Every pull request, including unrecognized statuses.
    #[default]
    All,
    Open,
    Merged,
    Closed,
}

impl PrFilter {
    /// Parse a filter name, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "open" => Some(Self::Open),
            "merged" => Some(Self::Merged),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    /// Parse a filter name, or fail with a user-actionable error.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            PrDiffError::UserError(format!(
                "unknown status filter '{}'. Expected one of: all, open, merged, closed",
                s
            ))
        })
    }

    /// Whether a pull request with this status belongs in the tab.
    pub fn matches(self, status: &PrStatus) -> bool {
        match self {
            PrFilter::All => true,
            PrFilter::Open => *status == PrStatus::Open,
            PrFilter::Merged => *status == PrStatus::Merged,
            PrFilter::Closed => *status == PrStatus::Closed,
        }
    }
}

impl TryFrom<String> for PrFilter {
    type Error = PrDiffError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl fmt::Display for PrFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrFilter::All => write!(f, "ALL"),
            PrFilter::Open => write!(f, "OPEN"),
            PrFilter::Merged => write!(f, "MERGED"),
            PrFilter::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Select pull requests matching a filter, preserving order.
pub fn filter_pull_requests(prs: &[PullRequest], filter: PrFilter) -> Vec<&PullRequest> {
    prs.iter().filter(|pr| filter.matches(&pr.status)).collect()
}

/// Number of pull requests under each filter tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
    pub all: usize,
    pub open: usize,
    pub merged: usize,
    pub closed: usize,
}

impl FilterCounts {
    pub fn get(&self, filter: PrFilter) -> usize {
        match filter {
            PrFilter::All => self.all,
            PrFilter::Open => self.open,
            PrFilter::Merged => self.merged,
            PrFilter::Closed => self.closed,
        }
    }
}

/// Count pull requests per filter tab.
pub fn filter_counts(prs: &[PullRequest]) -> FilterCounts {
    let mut counts = FilterCounts {
        all: prs.len(),
        ..FilterCounts::default()
    };
    for pr in prs {
        match pr.status {
            PrStatus::Open => counts.open += 1,
            PrStatus::Merged => counts.merged += 1,
            PrStatus::Closed => counts.closed += 1,
            PrStatus::Other(_) => {}
        }
    }
    counts
}

/// Glob-based selection of file changes by path.
///
/// An empty pattern list selects every file.
#[derive(Debug, Clone)]
pub struct PathFilter {
    globs: Option<GlobSet>,
}

impl PathFilter {
    /// Compile glob patterns. Backslashes are normalized to forward slashes.
    pub fn new(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { globs: None });
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let normalized = normalize_path(pattern);
            let glob = Glob::new(&normalized).map_err(|e| {
                PrDiffError::UserError(format!("invalid path glob '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }

        let globs = builder
            .build()
            .map_err(|e| PrDiffError::UserError(format!("failed to compile path globs: {}", e)))?;

        Ok(Self { globs: Some(globs) })
    }

    /// Whether a file path is selected.
    pub fn matches(&self, path: &str) -> bool {
        match &self.globs {
            None => true,
            Some(globs) => globs.is_match(normalize_path(path)),
        }
    }

    /// Keep matching file changes, preserving order.
    pub fn apply(&self, files: Vec<FileChange>) -> Vec<FileChange> {
        files.into_iter().filter(|f| self.matches(&f.path)).collect()
    }
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
