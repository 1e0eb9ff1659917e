//! Presentation of parsed diffs and pull-request records.
//!
//! - `status`: badge text and style tokens for file/pull-request statuses
//! - `rows`: table layout of parsed diff lines
//! - `dates`: relative and absolute timestamp formatting
//! - `text`: plain-text views used by the CLI

pub mod dates;
pub mod rows;
pub mod status;
pub mod text;


pub use rows::{DiffRow, FileView, layout_rows};
pub use status::{pr_status_label, pr_status_style_class, status_label, status_style_class};
pub use text::{RenderOptions, render_file, render_list, render_pull_request};
