//! Loading pull-request records from disk or stdin.

use super::{FileChange, PullRequest};
use crate::error::{PrDiffError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Path argument that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read an input file to a string, or stdin when the path is `-`.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| PrDiffError::InputError(format!("failed to read stdin: {}", e)))?;
        return Ok(content);
    }

    std::fs::read_to_string(path)
        .map_err(|e| PrDiffError::InputError(format!("'{}': {}", path.display(), e)))
}

/// Load the file changes of one pull request (a JSON array of `FileChange`).
pub fn load_file_changes<P: AsRef<Path>>(path: P) -> Result<Vec<FileChange>> {
    let path = path.as_ref();
    let content = read_input(path)?;
    parse_json(&content, path)
}

/// Load a single pull request record.
pub fn load_pull_request<P: AsRef<Path>>(path: P) -> Result<PullRequest> {
    let path = path.as_ref();
    let content = read_input(path)?;
    parse_json(&content, path)
}

/// Load a pull request listing.
///
/// Accepts either a JSON array of records or a single record object.
pub fn load_pull_requests<P: AsRef<Path>>(path: P) -> Result<Vec<PullRequest>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Listing {
        Many(Vec<PullRequest>),
        One(Box<PullRequest>),
    }

    let path = path.as_ref();
    let content = read_input(path)?;
    match parse_json::<Listing>(&content, path)? {
        Listing::Many(prs) => Ok(prs),
        Listing::One(pr) => Ok(vec![*pr]),
    }
}

pub(super) fn parse_json<T: DeserializeOwned>(content: &str, source: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|e| {
        PrDiffError::FormatError(format!("'{}': {}", display_source(source), e))
    })
}

fn display_source(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
