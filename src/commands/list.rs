//! Implementation of the `prdiff list` command.

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::filter::{PrFilter, filter_counts};
use crate::model::load_pull_requests;
use crate::render::render_list;
use chrono::Utc;
use serde_json::json;

/// Execute the `prdiff list` command.
///
/// Uses `--status` when given, otherwise the configured default filter.
pub fn cmd_list(args: ListArgs, config: &Config) -> Result<()> {
    let filter = match args.status.as_deref() {
        Some(status) => PrFilter::parse(status)?,
        None => config.default_status_filter,
    };
    let prs = load_pull_requests(&args.pull_requests)?;

    print!("{}", render_list(&prs, filter, Utc::now()));

    let event = Event::new(EventAction::List)
        .with_subject(args.pull_requests.display().to_string())
        .with_details(json!({
            "filter": filter,
            "shown": filter_counts(&prs).get(filter),
            "total": prs.len(),
        }));
    events::record(config, &event)
}
