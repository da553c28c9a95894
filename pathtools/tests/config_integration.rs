//! Integration tests for layered configuration.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so concurrent access would
//! race.

mod common;

use common::EnvGuard;
use pathtools::config::{Config, ConfigBuilder, OutputFormat};
use pathtools::Error;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

/// Clear every PATHTOOLS_* variable the config layer reads.
fn clear_env() -> Vec<EnvGuard> {
    ["PATHTOOLS_DELIMITER", "PATHTOOLS_FALLBACK", "PATHTOOLS_FORMAT"]
        .iter()
        .map(|key| EnvGuard::remove(key))
        .collect()
}

fn user_dir_with(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.yaml"), content).unwrap();
    dir
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    let _env = clear_env();
    let user = user_dir_with("delimiter: ';'\nfallback: [/user]\noutput_format: human\n");
    let explicit = user.path().join("explicit.yaml");
    fs::write(&explicit, "fallback: [/explicit]\n").unwrap();
    let _format = EnvGuard::set("PATHTOOLS_FORMAT", "json");

    let config = ConfigBuilder::new()
        .with_user_dir(user.path())
        .with_file(&explicit)
        .with_config(Config {
            delimiter: Some("|".into()),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.delimiter(), "|");
    assert_eq!(config.fallback(), ["/explicit"]);
    assert_eq!(config.output_format(), OutputFormat::Json);
}

#[test]
#[serial]
fn test_env_fallback_is_cleaned() {
    let _env = clear_env();
    let _fallback = EnvGuard::set("PATHTOOLS_FALLBACK", "a//b/, ./c");
    let user = tempfile::tempdir().unwrap();

    let config = ConfigBuilder::new()
        .with_user_dir(user.path())
        .build()
        .unwrap();
    assert_eq!(config.fallback().len(), 2);
    assert_eq!(config.fallback()[1], "c");
}

#[test]
#[serial]
fn test_env_empty_delimiter_fails_validation() {
    let _env = clear_env();
    let _delimiter = EnvGuard::set("PATHTOOLS_DELIMITER", "");
    let user = tempfile::tempdir().unwrap();

    let result = ConfigBuilder::new().with_user_dir(user.path()).build();
    assert!(matches!(result, Err(Error::Validation { ref field, .. }) if field == "delimiter"));
}

#[test]
#[serial]
fn test_skip_env_ignores_bad_values() {
    let _env = clear_env();
    let _format = EnvGuard::set("PATHTOOLS_FORMAT", "xml");
    let user = tempfile::tempdir().unwrap();

    let config = ConfigBuilder::new()
        .with_user_dir(user.path())
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config.output_format(), OutputFormat::Human);
}

#[test]
fn test_malformed_user_file() {
    let user = user_dir_with("fallback: not-a-list: [\n");

    let result = ConfigBuilder::new()
        .with_user_dir(user.path())
        .skip_env()
        .build();
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_unknown_key_in_user_file() {
    let user = user_dir_with("separator: ','\n");

    let result = ConfigBuilder::new()
        .with_user_dir(user.path())
        .skip_env()
        .build();
    assert!(matches!(result, Err(Error::Configuration(_))));
}
