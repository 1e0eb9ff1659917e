//! CLI argument parsing for prdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

/// prdiff: pull-request diff viewer.
///
/// Reads pull-request and file-change records (JSON, as served by the
/// code-review API), parses each file's unified diff into numbered rows,
/// and prints file and pull-request views with addition/deletion totals.
/// Any input path may be `-` to read stdin.
#[derive(Parser, Debug)]
#[command(name = "prdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./prdiff.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a raw unified diff into classified lines.
    ///
    /// Prints the numbered row table, or the line records as JSON.
    Parse(ParseArgs),

    /// Render every file in a file-change set.
    ///
    /// Input is the JSON array served by `/pull-requests/{id}/files`.
    Files(FilesArgs),

    /// Show a pull request with its file changes.
    ///
    /// Totals are recomputed from the file-change set.
    Show(ShowArgs),

    /// List pull requests with status filter tabs.
    List(ListArgs),

    /// Print files-changed, additions, and deletions for a file-change set.
    Stats(StatsArgs),
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Diff file to parse (`-` for stdin).
    pub input: PathBuf,

    /// Output format (text, json).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `files` command.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// File-change JSON (`-` for stdin).
    pub files: PathBuf,

    /// Only render files whose path matches one of these globs.
    #[arg(long = "path", value_delimiter = ',')]
    pub paths: Vec<String>,

    /// Show file headers and stats only.
    #[arg(long)]
    pub collapsed: bool,

    /// Output format (text, json).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Pull-request JSON (`-` for stdin).
    pub pull_request: PathBuf,

    /// File-change JSON for the pull request.
    #[arg(long)]
    pub files: PathBuf,

    /// Only render files whose path matches one of these globs.
    #[arg(long = "path", value_delimiter = ',')]
    pub paths: Vec<String>,

    /// Show file headers and stats only.
    #[arg(long)]
    pub collapsed: bool,

    /// Output format (text, json).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Pull-request listing JSON (`-` for stdin).
    pub pull_requests: PathBuf,

    /// Status filter (all, open, merged, closed).
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Arguments for the `stats` command.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// File-change JSON (`-` for stdin).
    pub files: PathBuf,

    /// Only count files whose path matches one of these globs.
    #[arg(long = "path", value_delimiter = ',')]
    pub paths: Vec<String>,

    /// Output format (text, json).
    #[arg(short, long)]
    pub format: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
