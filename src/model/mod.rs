//! Pull-request record model for prdiff.
//!
//! These records mirror the JSON the code-review API serves:
//! - `GET /pull-requests` returns an array of [`PullRequest`]
//! - `GET /pull-requests/{id}` returns a single [`PullRequest`]
//! - `GET /pull-requests/{id}/files` returns an array of [`FileChange`]
//!
//! Field names are camelCase on the wire. Records are read-only here; they
//! are produced upstream and consumed purely for presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

mod io;
pub mod types;


pub use io::{STDIN_PATH, load_file_changes, load_pull_request, load_pull_requests, read_input};
pub use types::{FileStatus, PrStatus};

/// A user as embedded in pull-request and repository records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// The repository a pull request targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner: User,
}

/// One file's modification within a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub id: String,
    /// Repository-relative path of the changed file.
    pub path: String,
    pub status: FileStatus,
    /// Added line count as recorded by the ingestion process.
    pub additions: u32,
    /// Deleted line count as recorded by the ingestion process.
    pub deletions: u32,
    /// Unified-diff text for this file. Missing or null reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub diff: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A pull request header record.
///
/// `changes` is the list endpoint's file count. When a [`FileChange`] set is
/// loaded, views recompute the count from that set instead (see
/// [`crate::stats::summarize`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: PrStatus,
    pub author: User,
    pub repository: Repository,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<u32>,
}
