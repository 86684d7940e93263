//! Config loading from a temp home.

use assert_fs::prelude::*;
use std::path::PathBuf;
use tracker_core::{config, ConfigError, TrackerConfig};

#[test]
fn loads_templates_and_log_filter() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".tracker/config.yaml")
        .write_str("templates: /srv/tracker/templates\nlog: debug\n")
        .expect("write");

    let loaded = config::load_at(home.path()).expect("load");
    assert_eq!(loaded.templates, Some(PathBuf::from("/srv/tracker/templates")));
    assert_eq!(loaded.log, "debug");
}

#[test]
fn omitted_fields_take_defaults() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".tracker/config.yaml")
        .write_str("templates: ./tpl\n")
        .expect("write");

    let loaded = config::load_at(home.path()).expect("load");
    assert_eq!(loaded.log, "warn");
}

#[test]
fn empty_file_is_default() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".tracker/config.yaml").write_str("\n").expect("write");

    assert_eq!(config::load_at(home.path()).expect("load"), TrackerConfig::default());
}

#[test]
fn corrupt_yaml_returns_parse_error_with_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".tracker/config.yaml")
        .write_str("- this is a list, not a mapping\n")
        .expect("write");

    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("config.yaml"));
}
