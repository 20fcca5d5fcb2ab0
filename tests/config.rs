//! # Config Tests
//!
//! Tests for the global config file: setup, loading through the library,
//! and how settings reach the commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::time::Duration;

use common::{GlobalConfigBuilder, TestEnv};
use predicates::prelude::*;
use shellkit::Config;

// =============================================================================
// Library Loading
// =============================================================================

#[test]
fn test_load_defaults_without_file() {
    let _env = TestEnv::new();

    let config = Config::load().expect("load should succeed");
    let options = config.ini_options();

    assert_eq!(options.comment_marker, ";");
    assert!(!options.keep_empty_sections);
    assert_eq!(config.retry_policy().attempts, 3);
    assert_eq!(config.retry_policy().delay, Duration::from_millis(500));
    assert!(config.variables().is_empty());
}

#[test]
fn test_load_custom_values() {
    let env = TestEnv::new();
    env.write_global_config(
        &GlobalConfigBuilder::new()
            .comment_marker("#")
            .keep_empty_sections(true)
            .retry_attempts(7)
            .retry_delay_ms(10)
            .variable("owner", "ops")
            .build(),
    );

    let config = Config::load().expect("load should succeed");

    assert_eq!(config.ini_options().comment_marker, "#");
    assert!(config.ini_options().keep_empty_sections);
    assert_eq!(config.retry_policy().attempts, 7);
    assert_eq!(config.retry_policy().delay, Duration::from_millis(10));
    assert_eq!(
        config.variables().get("owner").map(String::as_str),
        Some("ops")
    );
}

#[test]
fn test_unknown_key_is_an_error() {
    let env = TestEnv::new();
    env.write_global_config("colour = false\n");

    let err = Config::load().expect_err("unknown keys are rejected");
    assert!(format!("{err:#}").contains("Failed to parse global config"));
}

#[test]
fn test_color_disabled_by_config() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().color(false).build());

    let config = Config::load().expect("load should succeed");
    assert!(!config.color_stdout());
    assert!(!config.color_stderr());
}

// =============================================================================
// setup
// =============================================================================

#[test]
fn test_setup_creates_commented_config() {
    let env = TestEnv::new();

    env.sk()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created global config"));

    let content = env.read_global_config();
    assert!(content.contains("comment_marker = \";\""));
    assert!(content.contains("retry_attempts = 3"));
    assert!(content.contains("[variables]"));

    // The written file loads back cleanly
    Config::load().expect("written config should load");
}

#[test]
fn test_setup_keeps_existing_config() {
    let env = TestEnv::new();
    env.write_global_config("comment_marker = \"#\"\n");

    env.sk()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(env.read_global_config(), "comment_marker = \"#\"\n");
}

#[test]
fn test_broken_config_fails_commands() {
    let env = TestEnv::new();
    env.write_global_config("color = \"maybe\"\n");

    env.sk()
        .args(["paint", "red", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse global config"));
}

// =============================================================================
// completions
// =============================================================================

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.sk()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_sk()"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let env = TestEnv::new();

    env.sk().args(["completions", "tcsh"]).assert().failure();
}
