//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config, OutputFormat};
use crate::filter::PrFilter;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.expand_files);
    assert!(config.show_raw_on_parse_failure);
    assert_eq!(config.content_width, 0);
    assert_eq!(config.default_status_filter, PrFilter::All);
    assert_eq!(config.default_format, OutputFormat::Text);
    assert!(config.event_log.is_none());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
expand_files: false
default_status_filter: open
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert!(!config.expand_files);
    assert_eq!(config.default_status_filter, PrFilter::Open);

    // Unspecified values should use defaults
    assert!(config.show_raw_on_parse_failure);
    assert_eq!(config.default_format, OutputFormat::Text);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
expand_files: false
show_raw_on_parse_failure: false
content_width: 120
default_status_filter: merged
default_format: json
event_log: logs/prdiff.ndjson
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!(!config.expand_files);
    assert!(!config.show_raw_on_parse_failure);
    assert_eq!(config.content_width, 120);
    assert_eq!(config.default_status_filter, PrFilter::Merged);
    assert_eq!(config.default_format, OutputFormat::Json);
    assert_eq!(config.event_log, Some(PathBuf::from("logs/prdiff.ndjson")));
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
expand_files: true
future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!(config.expand_files);
}

#[test]
fn test_invalid_filter_rejected() {
    let err = Config::from_yaml("default_status_filter: draft\n").unwrap_err();

    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_empty_event_log_rejected() {
    let err = Config::from_yaml("event_log: \"\"\n").unwrap_err();

    assert!(err.to_string().contains("event_log"));
}

#[test]
fn test_render_options_follow_config() {
    let config = Config {
        expand_files: false,
        content_width: 40,
        ..Config::default()
    };

    let options = config.render_options();

    assert!(!options.expand_files);
    assert!(options.show_raw_on_parse_failure);
    assert_eq!(options.content_width, 40);
}

#[test]
fn test_resolve_uses_file_in_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(CONFIG_FILE_NAME), "content_width: 7\n").unwrap();

    let config = Config::resolve(None, temp.path()).unwrap();

    assert_eq!(config.content_width, 7);
}

#[test]
fn test_resolve_defaults_without_file() {
    let temp = TempDir::new().unwrap();

    let config = Config::resolve(None, temp.path()).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_explicit_path_must_exist() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("custom.yaml");

    let err = Config::resolve(Some(&missing), Path::new(".")).unwrap_err();

    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
    assert!(OutputFormat::parse("yaml").is_err());
}

#[test]
fn test_enum_keys_are_case_insensitive() {
    let yaml = r#"
default_status_filter: OPEN
default_format: Json
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.default_status_filter, PrFilter::Open);
    assert_eq!(config.default_format, OutputFormat::Json);
}

#[test]
fn test_invalid_format_rejected() {
    let err = Config::from_yaml("default_format: xml\n").unwrap_err();

    assert!(err.to_string().contains("unknown output format 'xml'"));
}
