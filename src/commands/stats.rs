//! Implementation of the `prdiff stats` command.
//!
//! Sums the recorded addition/deletion counts of a file-change set.

use super::{resolve_format, to_json};
use crate::cli::StatsArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::filter::PathFilter;
use crate::model::load_file_changes;
use crate::stats::{ChangeSummary, summarize};
use serde_json::json;

/// Execute the `prdiff stats` command.
pub fn cmd_stats(args: StatsArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let path_filter = PathFilter::new(&args.paths)?;
    let files = path_filter.apply(load_file_changes(&args.files)?);

    let summary = summarize(&files);
    print!("{}", format_stats(&summary, format)?);

    let event = Event::new(EventAction::Stats)
        .with_subject(args.files.display().to_string())
        .with_details(json!(summary));
    events::record(config, &event)
}

fn format_stats(summary: &ChangeSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Text => Ok(format!(
            "Files Changed: {}\nAdditions:     +{}\nDeletions:     -{}\n",
            summary.files_changed, summary.total_additions, summary.total_deletions
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_stats() {
        let summary = ChangeSummary {
            files_changed: 3,
            total_additions: 10,
            total_deletions: 3,
        };

        assert_eq!(
            format_stats(&summary, OutputFormat::Text).unwrap(),
            "Files Changed: 3\nAdditions:     +10\nDeletions:     -3\n"
        );
    }

    #[test]
    fn json_stats() {
        let out = format_stats(&ChangeSummary::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["filesChanged"], 0);
        assert_eq!(value["totalAdditions"], 0);
    }
}
