//! Implementation of the `prdiff show` command.
//!
//! Displays a pull request with its file changes. Files-changed and
//! addition/deletion totals are recomputed from the loaded file set.

use super::{resolve_format, to_json};
use crate::cli::ShowArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{PrDiffError, Result};
use crate::events::{self, Event, EventAction};
use crate::filter::PathFilter;
use crate::model::{
    FileChange, PullRequest, STDIN_PATH, load_file_changes, load_pull_request,
};
use crate::render::{
    FileView, RenderOptions, pr_status_label, pr_status_style_class, render_pull_request,
};
use crate::stats::summarize;
use serde_json::json;

/// Execute the `prdiff show` command.
pub fn cmd_show(args: ShowArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let path_filter = PathFilter::new(&args.paths)?;

    if args.pull_request.as_os_str() == STDIN_PATH && args.files.as_os_str() == STDIN_PATH {
        return Err(PrDiffError::UserError(
            "only one input may be read from stdin ('-')".to_string(),
        ));
    }

    let pr = load_pull_request(&args.pull_request)?;
    let files = path_filter.apply(load_file_changes(&args.files)?);

    let mut options = config.render_options();
    if args.collapsed {
        options.expand_files = false;
    }

    print!("{}", format_show(&pr, &files, &options, format)?);

    let summary = summarize(&files);
    let event = Event::new(EventAction::Show)
        .with_subject(pr.id.clone())
        .with_details(json!({
            "status": pr.status.as_str(),
            "files_changed": summary.files_changed,
            "total_additions": summary.total_additions,
            "total_deletions": summary.total_deletions,
        }));
    events::record(config, &event)
}

fn format_show(
    pr: &PullRequest,
    files: &[FileChange],
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_pull_request(pr, files, options)),
        OutputFormat::Json => {
            let views: Vec<FileView> = files.iter().map(FileView::build).collect();
            to_json(&json!({
                "pullRequest": pr,
                "statusLabel": pr_status_label(&pr.status),
                "statusStyle": pr_status_style_class(&pr.status),
                "files": views,
                "summary": summarize(files),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PR_JSON: &str = r#"{
      "id": "pr-7",
      "title": "Tidy parser",
      "status": "MERGED",
      "author": { "id": "u1", "username": "octo", "email": "o@example.com" },
      "repository": {
        "id": "r1", "name": "review-app",
        "owner": { "id": "u1", "username": "octo", "email": "o@example.com" }
      },
      "createdAt": "2025-06-01T09:00:00Z",
      "updatedAt": "2025-06-02T09:00:00Z"
    }"#;

    const FILES_JSON: &str = r#"[
      {"id": "f1", "path": "src/parser.rs", "status": "MODIFIED", "additions": 4, "deletions": 2, "diff": "@@ -1 +1 @@\n-a\n+b"},
      {"id": "f2", "path": "docs/notes.md", "status": "ADDED", "additions": 9, "deletions": 0, "diff": ""}
    ]"#;

    #[test]
    fn show_logs_event_with_recomputed_totals() {
        let temp = TempDir::new().unwrap();
        let pr_path = temp.path().join("pr.json");
        let files_path = temp.path().join("files.json");
        let log = temp.path().join("events.ndjson");
        std::fs::write(&pr_path, PR_JSON).unwrap();
        std::fs::write(&files_path, FILES_JSON).unwrap();

        let config = Config {
            event_log: Some(log.clone()),
            ..Config::default()
        };
        let args = ShowArgs {
            pull_request: pr_path,
            files: files_path,
            paths: vec!["src/**".to_string()],
            collapsed: true,
            format: None,
        };

        cmd_show(args, &config).unwrap();

        let content = std::fs::read_to_string(&log).unwrap();
        let event: Event = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(event.action, EventAction::Show);
        assert_eq!(event.subject.as_deref(), Some("pr-7"));
        assert_eq!(event.details["files_changed"], 1);
        assert_eq!(event.details["total_additions"], 4);
        assert_eq!(event.details["status"], "MERGED");
    }

    #[test]
    fn show_missing_pull_request_is_input_error() {
        let temp = TempDir::new().unwrap();
        let args = ShowArgs {
            pull_request: temp.path().join("missing.json"),
            files: PathBuf::from("unused.json"),
            paths: Vec::new(),
            collapsed: false,
            format: None,
        };

        let err = cmd_show(args, &Config::default()).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::INPUT_FAILURE);
    }

    #[test]
    fn show_rejects_both_inputs_from_stdin() {
        let args = ShowArgs {
            pull_request: PathBuf::from(STDIN_PATH),
            files: PathBuf::from(STDIN_PATH),
            paths: Vec::new(),
            collapsed: false,
            format: None,
        };

        let err = cmd_show(args, &Config::default()).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn json_view_recomputes_totals_and_styles_status() {
        let pr: PullRequest = serde_json::from_str(PR_JSON).unwrap();
        let files: Vec<FileChange> = serde_json::from_str(FILES_JSON).unwrap();

        let out = format_show(&pr, &files, &RenderOptions::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["pullRequest"]["id"], "pr-7");
        assert_eq!(value["statusLabel"], "MERGED");
        assert_eq!(
            value["statusStyle"],
            "text-purple-600 bg-purple-50 border border-purple-200"
        );
        assert_eq!(value["files"].as_array().unwrap().len(), 2);
        assert_eq!(value["files"][1]["parsed"], false);
        assert_eq!(value["summary"]["filesChanged"], 2);
        assert_eq!(value["summary"]["totalAdditions"], 13);
    }

    #[test]
    fn text_view_lists_each_file() {
        let pr: PullRequest = serde_json::from_str(PR_JSON).unwrap();
        let files: Vec<FileChange> = serde_json::from_str(FILES_JSON).unwrap();

        let out = format_show(&pr, &files, &RenderOptions::default(), OutputFormat::Text).unwrap();

        assert!(out.contains("Tidy parser [MERGED]\n"));
        assert!(out.contains("Files Changed: 2   Additions: +13   Deletions: -2\n"));
        assert!(out.contains("src/parser.rs [Modified] +4 -2\n"));
        assert!(out.contains("docs/notes.md [New] +9\n"));
    }
}
