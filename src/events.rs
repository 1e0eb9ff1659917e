//! Event logging for prdiff.
//!
//! Each command appends one event to an NDJSON file (one JSON object per
//! line) when `event_log` is set in the config. Nothing is written otherwise.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The command that ran (parse, files, show, list, stats)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `subject`: Optional pull-request ID or input path
//! - `details`: Freeform object with command-specific details

use crate::config::Config;
use crate::error::{PrDiffError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A raw diff was parsed
    Parse,
    /// A file-change set was rendered
    Files,
    /// A pull request detail view was rendered
    Show,
    /// A pull request listing was rendered
    List,
    /// Summary statistics were computed
    Stats,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Parse => write!(f, "parse"),
            EventAction::Files => write!(f, "files"),
            EventAction::Show => write!(f, "show"),
            EventAction::List => write!(f, "list"),
            EventAction::Stats => write!(f, "stats"),
        }
    }
}

/// An event record for the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Optional pull-request ID or input path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            subject: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the subject for this event.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PrDiffError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log configured in `config`, if any.
pub fn record(config: &Config, event: &Event) -> Result<()> {
    match &config.event_log {
        Some(path) => append_event(path, event),
        None => Ok(()),
    }
}

/// Append an event to an NDJSON log file.
///
/// The file and its parent directory are created if they don't exist.
/// Each append results in one line with a trailing newline.
pub fn append_event(events_file: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = events_file.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PrDiffError::UserError(format!(
                "failed to create event log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(events_file)
        .map_err(|e| {
            PrDiffError::UserError(format!(
                "failed to open event log '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PrDiffError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}
