//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use plotplan_core::config::{CliConfigOverrides, ConfigSource, PlanConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn clear_plotplan_env() {
    for key in [
        "PLOTPLAN_PERSIST_LOCATION",
        "PLOTPLAN_CLEAR_PRESERVES_LOCATION",
        "PLOTPLAN_MAX_HISTORY",
        "PLOTPLAN_CELL_SIZE_FEET",
        "PLOTPLAN_STATE_PATH",
        "PLOTPLAN_API_URL",
        "PLOTPLAN_GEOCODER_URL",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_default_configuration() {
    clear_plotplan_env();
    let config = PlanConfig::with_defaults();

    assert!(!config.persist_location.value);
    assert_eq!(config.persist_location.source, ConfigSource::Default);
    assert!(config.clear_preserves_location.value);
    assert_eq!(config.max_history.value, 50);
    assert_eq!(config.cell_size_feet.value, 1.0);
    assert_eq!(config.state_path.value, PathBuf::from("plotplan.json"));
    assert_eq!(config.api_base_url.value, "http://localhost:8000/api");
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    clear_plotplan_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
persist_location = true
clear_preserves_location = false
max_history = 10
cell_size_feet = 5.0
state_path = "plans/backyard.json"
api_base_url = "http://gardens.test/api"
geocoder_url = "http://geocoder.test/search"
"#
    )
    .unwrap();

    let config = PlanConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert!(config.persist_location.value);
    assert_eq!(config.persist_location.source, ConfigSource::File);
    assert!(!config.clear_preserves_location.value);
    assert_eq!(config.max_history.value, 10);
    assert_eq!(config.cell_size_feet.value, 5.0);
    assert_eq!(config.state_path.value, PathBuf::from("plans/backyard.json"));
    assert_eq!(config.api_base_url.value, "http://gardens.test/api");
    assert_eq!(config.geocoder_url.value, "http://geocoder.test/search");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_plotplan_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_history = 10").unwrap();

    env::set_var("PLOTPLAN_MAX_HISTORY", "20");
    env::set_var("PLOTPLAN_PERSIST_LOCATION", "true");

    let config = PlanConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.max_history.value, 20);
    assert_eq!(config.max_history.source, ConfigSource::Environment);
    assert!(config.persist_location.value);
    assert_eq!(config.persist_location.source, ConfigSource::Environment);

    clear_plotplan_env();
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    clear_plotplan_env();
    env::set_var("PLOTPLAN_MAX_HISTORY", "20");

    let mut config = PlanConfig::with_defaults().load_from_env();
    config.update_from_cli(CliConfigOverrides {
        max_history: Some(30),
        state_path: Some(PathBuf::from("cli.json")),
        ..Default::default()
    });

    assert_eq!(config.max_history.value, 30);
    assert_eq!(config.max_history.source, ConfigSource::Cli);
    assert_eq!(config.state_path.value, PathBuf::from("cli.json"));

    clear_plotplan_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_plotplan_env();
    env::set_var("PLOTPLAN_MAX_HISTORY", "lots");
    env::set_var("PLOTPLAN_PERSIST_LOCATION", "sometimes");
    env::set_var("PLOTPLAN_CELL_SIZE_FEET", "-3");

    let config = PlanConfig::with_defaults().load_from_env();

    assert_eq!(config.max_history.value, 50);
    assert_eq!(config.max_history.source, ConfigSource::Default);
    assert!(!config.persist_location.value);
    assert_eq!(config.cell_size_feet.value, 1.0);

    clear_plotplan_env();
}

#[test]
#[serial]
fn test_inspection_map_reports_sources() {
    clear_plotplan_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_history = 10").unwrap();

    let config = PlanConfig::with_defaults().load_from_file(file.path()).unwrap();
    let map = config.to_inspection_map();

    assert_eq!(map["max_history"], ("10".to_string(), ConfigSource::File));
    assert_eq!(map["persist_location"].1, ConfigSource::Default);
}
