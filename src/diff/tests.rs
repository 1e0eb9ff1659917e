//! Tests for diff parsing.

use super::api::{DiffLine, DiffLineKind, LineCounts, line_counts};
use super::helpers::{is_preamble_line, parse_hunk_header};
use super::parser::parse_diff;

/// Test the canonical single-hunk example.
#[test]
fn test_parse_single_hunk() {
    let diff = "@@ -5,3 +10,4 @@\n context\n-removed\n+added";

    let result = parse_diff(diff);

    assert_eq!(
        result,
        vec![
            DiffLine::hunk("@@ -5,3 +10,4 @@"),
            DiffLine::context("context", 5, 10),
            DiffLine::remove("removed", 6),
            DiffLine::add("added", 11),
        ]
    );
}

/// Test a full git diff with preamble lines.
#[test]
fn test_parse_git_diff_with_preamble() {
    let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
index abc1234..def5678 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -10,3 +10,4 @@ fn existing_function() {
     let a = 1;
-    let b = 2;
+    let b = 3;
+    let c = 4;
     a + b
"#;

    let result = parse_diff(diff);

    assert_eq!(result.len(), 6);
    assert_eq!(result[0].kind, DiffLineKind::Hunk);
    assert_eq!(result[0].content, "@@ -10,3 +10,4 @@ fn existing_function() {");
    assert_eq!(result[1], DiffLine::context("    let a = 1;", 10, 10));
    assert_eq!(result[2], DiffLine::remove("    let b = 2;", 11));
    assert_eq!(result[3], DiffLine::add("    let b = 3;", 11));
    assert_eq!(result[4], DiffLine::add("    let c = 4;", 12));
    assert_eq!(result[5], DiffLine::context("    a + b", 12, 13));
}

/// File header lines start with +/- but are never emitted as add/remove.
#[test]
fn test_file_headers_are_not_changes() {
    let diff = "--- a/old.txt\n+++ b/new.txt\n--- /dev/null\n+++ /dev/null";

    let result = parse_diff(diff);

    assert!(result.is_empty());
}

/// Test that multiple hunks reset counters independently.
#[test]
fn test_parse_multiple_hunks() {
    let diff = "@@ -1,2 +1,2 @@\n-a\n+b\n same\n@@ -40 +41 @@\n+tail";

    let result = parse_diff(diff);

    assert_eq!(result.len(), 6);
    assert_eq!(result[1], DiffLine::remove("a", 1));
    assert_eq!(result[2], DiffLine::add("b", 1));
    assert_eq!(result[3], DiffLine::context("same", 2, 2));
    assert_eq!(result[4].content, "@@ -40 +41 @@");
    assert_eq!(result[5], DiffLine::add("tail", 41));
}

/// Test that empty input yields nothing.
#[test]
fn test_empty_input() {
    assert!(parse_diff("").is_empty());
    assert!(parse_diff("\n\n").is_empty());
}

/// Lines before any hunk header keep zero counters.
#[test]
fn test_no_hunk_header_keeps_zero_counters() {
    let diff = "+first\n-second\n third";

    let result = parse_diff(diff);

    assert_eq!(
        result,
        vec![
            DiffLine::add("first", 0),
            DiffLine::remove("second", 0),
            DiffLine::context("third", 1, 1),
        ]
    );
}

/// A malformed header is still emitted but leaves the counters alone.
#[test]
fn test_malformed_hunk_header_keeps_counters() {
    let diff = "@@ -3 +7 @@\n+x\n@@ garbage @@\n+y";

    let result = parse_diff(diff);

    assert_eq!(result.len(), 4);
    assert_eq!(result[1], DiffLine::add("x", 7));
    assert_eq!(result[2], DiffLine::hunk("@@ garbage @@"));
    assert_eq!(result[3], DiffLine::add("y", 8));
}

/// Unmarked lines are context tagged with the current counters, without advancing.
#[test]
fn test_unmarked_line_fallback_does_not_advance() {
    let diff = "@@ -1,2 +1,2 @@\nno marker here\n next";

    let result = parse_diff(diff);

    assert_eq!(result[1], DiffLine::context("no marker here", 1, 1));
    assert_eq!(result[2], DiffLine::context("next", 1, 1));
}

/// "\ No newline at end of file" falls through to the unmarked branch.
#[test]
fn test_no_newline_marker_is_passed_through() {
    let diff = "@@ -1 +1 @@\n-old\n\\ No newline at end of file\n+new";

    let result = parse_diff(diff);

    assert_eq!(result.len(), 4);
    assert_eq!(result[2], DiffLine::context("\\ No newline at end of file", 2, 1));
    assert_eq!(result[3], DiffLine::add("new", 1));
}

/// Preamble lines such as "new file mode" are not preamble and pass through.
#[test]
fn test_only_known_preamble_is_dropped() {
    let diff = "diff --git a/x b/x\nnew file mode 100644\nindex 0000000..abc1234\n--- /dev/null\n+++ b/x\n@@ -0,0 +1 @@\n+hello";

    let result = parse_diff(diff);

    assert_eq!(result.len(), 3);
    assert_eq!(result[0], DiffLine::context("new file mode 100644", 0, 0));
    assert_eq!(result[2], DiffLine::add("hello", 1));
}

/// Empty added and removed lines keep their empty content.
#[test]
fn test_marker_only_lines() {
    let diff = "@@ -1,2 +1,2 @@\n-\n+\n ";

    let result = parse_diff(diff);

    assert_eq!(result[1], DiffLine::remove("", 1));
    assert_eq!(result[2], DiffLine::add("", 1));
    assert_eq!(result[3], DiffLine::context("", 2, 2));
}

/// CRLF line endings are normalized.
#[test]
fn test_crlf_input() {
    let diff = "@@ -1 +1 @@\r\n-old\r\n+new\r\n";

    let result = parse_diff(diff);

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].content, "@@ -1 +1 @@");
    assert_eq!(result[1], DiffLine::remove("old", 1));
    assert_eq!(result[2], DiffLine::add("new", 1));
}

/// Parsing is a pure function of its input.
#[test]
fn test_parse_is_idempotent() {
    let diff = "@@ -2,2 +2,3 @@\n a\n-b\n+c\n+d\nloose";

    assert_eq!(parse_diff(diff), parse_diff(diff));
}

/// Output never has more records than input lines.
#[test]
fn test_output_bounded_by_input_lines() {
    let inputs = [
        "",
        "@@",
        "@@ -1 +1 @@\n+a\n-b\n c\nd\n\n\n",
        "diff --git a/a b/a\nindex 1..2\n--- a/a\n+++ b/a",
        "+\n+\n+\n-\n-\n \n",
    ];

    for input in inputs {
        let lines = input.split('\n').count();
        assert!(parse_diff(input).len() <= lines, "input: {:?}", input);
    }
}

/// Counters never decrease within a hunk.
#[test]
fn test_counters_monotonic_within_hunk() {
    let diff = "@@ -10,5 +20,5 @@\n a\n-b\n+c\nloose\n d\n-e\n+f";

    let result = parse_diff(diff);
    let olds: Vec<usize> = result.iter().filter_map(|l| l.old_line_number).collect();
    let news: Vec<usize> = result.iter().filter_map(|l| l.new_line_number).collect();

    assert!(olds.windows(2).all(|w| w[0] <= w[1]));
    assert!(news.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_parse_hunk_header_formats() {
    assert_eq!(parse_hunk_header("@@ -1,3 +1,4 @@"), Some((1, 1)));
    assert_eq!(parse_hunk_header("@@ -10 +20 @@"), Some((10, 20)));
    assert_eq!(parse_hunk_header("@@ -5,0 +6,2 @@ fn main() {"), Some((5, 6)));
    assert_eq!(parse_hunk_header("@@ -0,0 +1 @@"), Some((0, 1)));
}

#[test]
fn test_parse_hunk_header_invalid() {
    assert_eq!(parse_hunk_header("@@"), None);
    assert_eq!(parse_hunk_header("@@ +1 -1 @@"), None);
    assert_eq!(parse_hunk_header("@@ -a,1 +b,2 @@"), None);
    assert_eq!(parse_hunk_header("@@ -99999999999999999999999 +1 @@"), None);
}

#[test]
fn test_is_preamble_line() {
    assert!(is_preamble_line("diff --git a/x b/x"));
    assert!(is_preamble_line("index abc..def"));
    assert!(is_preamble_line("--- a/x"));
    assert!(is_preamble_line("+++ b/x"));
    assert!(!is_preamble_line("new file mode 100644"));
    assert!(!is_preamble_line("Binary files differ"));
}

#[test]
fn test_line_counts() {
    let lines = parse_diff("@@ -1,2 +1,3 @@\n a\n-b\n+c\n+d\n@@ -9 +10 @@\n e");

    assert_eq!(
        line_counts(&lines),
        LineCounts {
            hunks: 2,
            added: 2,
            removed: 1,
            context: 2,
        }
    );
    assert_eq!(line_counts(&[]), LineCounts::default());
}

#[test]
fn test_diff_line_json_shape() {
    let line = DiffLine::remove("x", 4);
    let json = serde_json::to_value(&line).unwrap();

    assert_eq!(json["kind"], "remove");
    assert_eq!(json["oldLineNumber"], 4);
    assert!(json.get("newLineNumber").is_none());
}
