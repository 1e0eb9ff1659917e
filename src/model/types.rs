//! Status enumerations for pull requests and file changes.
//!
//! Both enums are open: any wire value outside the known set is kept
//! verbatim in an `Other` variant instead of failing deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a file was changed within a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileStatus {
    /// File was created.
    Added,
    /// File existed and was edited.
    Modified,
    /// File was removed.
    Deleted,
    /// Any value the ingestion side sent that we do not recognize.
    Other(String),
}

impl FileStatus {
    /// The wire representation (`ADDED`, `MODIFIED`, `DELETED`, or the raw value).
    pub fn as_str(&self) -> &str {
        match self {
            FileStatus::Added => "ADDED",
            FileStatus::Modified => "MODIFIED",
            FileStatus::Deleted => "DELETED",
            FileStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for FileStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ADDED" => FileStatus::Added,
            "MODIFIED" => FileStatus::Modified,
            "DELETED" => FileStatus::Deleted,
            _ => FileStatus::Other(raw),
        }
    }
}

impl From<&str> for FileStatus {
    fn from(raw: &str) -> Self {
        FileStatus::from(raw.to_string())
    }
}

impl From<FileStatus> for String {
    fn from(status: FileStatus) -> Self {
        match status {
            FileStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrStatus {
    Open,
    Closed,
    Merged,
    Other(String),
}

impl PrStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PrStatus::Open => "OPEN",
            PrStatus::Closed => "CLOSED",
            PrStatus::Merged => "MERGED",
            PrStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for PrStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OPEN" => PrStatus::Open,
            "CLOSED" => PrStatus::Closed,
            "MERGED" => PrStatus::Merged,
            _ => PrStatus::Other(raw),
        }
    }
}

impl From<&str> for PrStatus {
    fn from(raw: &str) -> Self {
        PrStatus::from(raw.to_string())
    }
}

impl From<PrStatus> for String {
    fn from(status: PrStatus) -> Self {
        match status {
            PrStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
