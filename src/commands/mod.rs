//! Command implementations for prdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, after resolving the config every command shares.

mod files;
mod list;
mod parse;
mod show;
mod stats;

use crate::cli::{Cli, Command};
use crate::config::{Config, OutputFormat};
use crate::error::{PrDiffError, Result};
use serde::Serialize;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PrDiffError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Parse(args) => parse::cmd_parse(args, &config),
        Command::Files(args) => files::cmd_files(args, &config),
        Command::Show(args) => show::cmd_show(args, &config),
        Command::List(args) => list::cmd_list(args, &config),
        Command::Stats(args) => stats::cmd_stats(args, &config),
    }
}

/// Pick the output format: the flag wins over the config default.
fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(value) => OutputFormat::parse(value),
        None => Ok(config.default_format),
    }
}

/// Pretty-print a value as JSON with a trailing newline.
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| PrDiffError::UserError(format!("failed to serialize output: {}", e)))
}
