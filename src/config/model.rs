//! Config struct definition and default implementation.

use super::types::*;
use crate::filter::PrFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for prdiff.
///
/// This struct represents the contents of `prdiff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Rendering
    // =========================================================================
    /// Show each file's diff table (false shows header and stats only).
    #[serde(default = "default_true")]
    pub expand_files: bool,

    /// Dump raw diff text when a file's diff yields no lines.
    #[serde(default = "default_true")]
    pub show_raw_on_parse_failure: bool,

    /// Maximum content characters per diff row (0 = unlimited).
    #[serde(default)]
    pub content_width: usize,

    // =========================================================================
    // Defaults for command flags
    // =========================================================================
    /// Status filter used by `list` when `--status` is not given.
    #[serde(default)]
    pub default_status_filter: PrFilter,

    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Append one NDJSON event per command to this file (disabled when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expand_files: default_true(),
            show_raw_on_parse_failure: default_true(),
            content_width: 0,
            default_status_filter: PrFilter::default(),
            default_format: OutputFormat::default(),
            event_log: None,
        }
    }
}
