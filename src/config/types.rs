//! Configuration types and defaults for prdiff.

use crate::error::{PrDiffError, Result};
use serde::{Deserialize, Serialize};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "prdiff.yaml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum OutputFormat {
    /// Human-readable tables (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse an output format, or fail with a user-actionable error.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            PrDiffError::UserError(format!(
                "unknown output format '{}'. Expected 'text' or 'json'",
                s
            ))
        })
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = PrDiffError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

// Default value functions for serde
pub(crate) fn default_true() -> bool {
    true
}
