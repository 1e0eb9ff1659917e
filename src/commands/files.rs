//! Implementation of the `prdiff files` command.
//!
//! Renders every file of a file-change set, optionally narrowed by path globs.

use super::{resolve_format, to_json};
use crate::cli::FilesArgs;
use crate::config::{Config, OutputFormat};
use crate::diff::parse_diff;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::filter::PathFilter;
use crate::model::{FileChange, load_file_changes};
use crate::render::{FileView, RenderOptions, render_file};
use crate::stats::summarize;
use serde_json::json;

/// Execute the `prdiff files` command.
pub fn cmd_files(args: FilesArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let path_filter = PathFilter::new(&args.paths)?;
    let files = path_filter.apply(load_file_changes(&args.files)?);

    let mut options = config.render_options();
    if args.collapsed {
        options.expand_files = false;
    }

    print!("{}", format_files(&files, &options, format)?);

    let summary = summarize(&files);
    let event = Event::new(EventAction::Files)
        .with_subject(args.files.display().to_string())
        .with_details(json!({
            "files_changed": summary.files_changed,
            "unparsed": files.iter().filter(|f| parse_diff(&f.diff).is_empty()).count(),
        }));
    events::record(config, &event)
}

fn format_files(
    files: &[FileChange],
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<String> {
    let summary = summarize(files);

    if format == OutputFormat::Json {
        let views: Vec<FileView> = files.iter().map(FileView::build).collect();
        return to_json(&json!({ "files": views, "summary": summary }));
    }

    if files.is_empty() {
        return Ok("No files changed\n".to_string());
    }

    let mut out = String::new();
    for file in files {
        out.push_str(&render_file(file, options));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} files changed, +{} -{}\n",
        summary.files_changed, summary.total_additions, summary.total_deletions
    ));
    Ok(out)
}
