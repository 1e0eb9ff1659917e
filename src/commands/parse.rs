//! Implementation of the `prdiff parse` command.
//!
//! Parses one raw unified diff and prints its rows or line records.

use super::{resolve_format, to_json};
use crate::cli::ParseArgs;
use crate::config::{Config, OutputFormat};
use crate::diff::{DiffLine, LineCounts, line_counts, parse_diff};
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::model::read_input;
use crate::render::layout_rows;
use crate::render::text::{UNPARSED_MESSAGE, render_rows};
use serde_json::json;

/// Execute the `prdiff parse` command.
pub fn cmd_parse(args: ParseArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let diff_text = read_input(&args.input)?;

    let lines = parse_diff(&diff_text);
    let counts = line_counts(&lines);

    print!("{}", format_parse(&lines, counts, format, config.content_width)?);

    let event = Event::new(EventAction::Parse)
        .with_subject(args.input.display().to_string())
        .with_details(json!({
            "lines": lines.len(),
            "hunks": counts.hunks,
            "added": counts.added,
            "removed": counts.removed,
        }));
    events::record(config, &event)
}

fn format_parse(
    lines: &[DiffLine],
    counts: LineCounts,
    format: OutputFormat,
    content_width: usize,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "lines": lines, "counts": counts })),
        OutputFormat::Text if lines.is_empty() => Ok(format!("{}\n", UNPARSED_MESSAGE)),
        OutputFormat::Text => {
            let mut out = render_rows(&layout_rows(lines), content_width);
            out.push_str(&format!(
                "\n{} hunk(s), +{} -{}, {} context line(s)\n",
                counts.hunks, counts.added, counts.removed, counts.context
            ));
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_has_rows_and_summary() {
        let lines = parse_diff("@@ -1 +1 @@\n-a\n+b");
        let out = format_parse(&lines, line_counts(&lines), OutputFormat::Text, 0).unwrap();

        assert!(out.starts_with("@@ -1 +1 @@\n"));
        assert!(out.ends_with("1 hunk(s), +1 -1, 0 context line(s)\n"));
    }

    #[test]
    fn empty_diff_prints_fallback() {
        let out = format_parse(&[], LineCounts::default(), OutputFormat::Text, 0).unwrap();

        assert_eq!(out, format!("{}\n", UNPARSED_MESSAGE));
    }

    #[test]
    fn json_output_lists_records() {
        let lines = parse_diff("@@ -5,3 +10,4 @@\n ctx");
        let out = format_parse(&lines, line_counts(&lines), OutputFormat::Json, 0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["lines"][0]["kind"], "hunk");
        assert_eq!(value["lines"][1]["oldLineNumber"], 5);
        assert_eq!(value["lines"][1]["newLineNumber"], 10);
        assert_eq!(value["counts"]["hunks"], 1);
    }
}
