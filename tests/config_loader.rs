use std::fs;

use tempfile::TempDir;
use viewmodel_kit::config::{ConfigError, ObservableConfig};
use viewmodel_kit::samples::ChildViewModel;
use viewmodel_kit::EventEmitter;

#[test]
fn default_values() {
    let config = ObservableConfig::default();
    assert_eq!(config.event_capacity, 64);
    assert!(config.log_lagged_events);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ObservableConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ObservableConfig::default());
}

#[test]
fn load_reads_observable_table() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[observable]\nevent_capacity = 8\nlog_lagged_events = false\n",
    )
    .unwrap();

    let config = ObservableConfig::load(&path).unwrap();
    assert_eq!(config.event_capacity, 8);
    assert!(!config.log_lagged_events);
}

#[test]
fn partial_table_keeps_remaining_defaults() {
    let config = ObservableConfig::from_toml_str("[observable]\nevent_capacity = 3\n").unwrap();
    assert_eq!(config.event_capacity, 3);
    assert!(config.log_lagged_events);
}

#[test]
fn empty_document_is_default() {
    let config = ObservableConfig::from_toml_str("").unwrap();
    assert_eq!(config, ObservableConfig::default());
}

#[test]
fn zero_capacity_fails_validation() {
    let result = ObservableConfig::from_toml_str("[observable]\nevent_capacity = 0\n");
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn malformed_toml_is_parse_error() {
    let result = ObservableConfig::from_toml_str("[observable\nevent_capacity = ");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn wrong_type_is_parse_error() {
    let result = ObservableConfig::from_toml_str("[observable]\nevent_capacity = \"many\"\n");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn unreadable_path_is_read_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // A directory exists but cannot be read as a file.
    let result = ObservableConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[tokio::test]
async fn capacity_from_config_bounds_lagging_observer() {
    let config = ObservableConfig::from_toml_str("[observable]\nevent_capacity = 2\n").unwrap();
    let child = ChildViewModel::with_config("a", &config);
    let mut observer = child.observe_events();

    for n in 0..4 {
        child.say(n.to_string());
    }

    let mut received = Vec::new();
    while let Some(viewmodel_kit::samples::ChildEvent::Message { payload, .. }) =
        observer.try_recv()
    {
        received.push(payload);
    }
    assert_eq!(received, vec!["2", "3"]);
}
