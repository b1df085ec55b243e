//! Configuration Loading Tests.
//!
//! Verifies defaults, partial JSON overrides and file loading.

use std::io::Write;

use pipesim_core::common::ConfigError;
use pipesim_core::config::{Config, TimingConfig};
use pretty_assertions::assert_eq;

#[test]
fn defaults_match_timing_model() {
    let config = Config::default();
    assert!(!config.general.trace_schedule);
    assert_eq!(config.timing.memory_busy_cycles, 1);
    assert_eq!(config.timing.dependent_alu_penalty, 2);
    assert!(config.timing.memory_order_check);
}

#[test]
fn empty_object_is_default() {
    let config = Config::from_json("{}").expect("empty config");
    assert_eq!(config, Config::default());
}

#[test]
fn partial_timing_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "timing": { "dependent_alu_penalty": 0 } }"#)
        .expect("partial config");
    assert_eq!(
        config.timing,
        TimingConfig {
            dependent_alu_penalty: 0,
            ..TimingConfig::default()
        }
    );
}

#[test]
fn general_section_parses() {
    let config =
        Config::from_json(r#"{ "general": { "trace_schedule": true } }"#).expect("config");
    assert!(config.general.trace_schedule);
    assert_eq!(config.timing, TimingConfig::default());
}

#[test]
fn invalid_json_is_parse_error() {
    let err = Config::from_json(r#"{ "timing": { "memory_busy_cycles": -1 } }"#)
        .expect_err("negative penalty must fail");
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = Config::from_json("not json").expect_err("garbage must fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"{{ "timing": {{ "memory_busy_cycles": 3, "memory_order_check": false }} }}"#
    )
    .expect("write config");

    let config = Config::from_file(file.path()).expect("load config");
    assert_eq!(config.timing.memory_busy_cycles, 3);
    assert!(!config.timing.memory_order_check);
    assert_eq!(config.timing.dependent_alu_penalty, 2);
}

#[test]
fn from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Config::from_file(dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_)));
}
