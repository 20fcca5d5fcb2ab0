//! # Text Command Tests
//!
//! End-to-end tests for INI parsing, template rendering, line parsing and
//! painting.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{GlobalConfigBuilder, TestEnv};
use predicates::prelude::*;
use serde_json::json;

/// Runs `sk ini` on `content` and returns the parsed JSON and stderr.
fn ini_json(env: &TestEnv, args: &[&str], content: &str) -> (serde_json::Value, String) {
    let output = env
        .sk()
        .arg("ini")
        .args(args)
        .write_stdin(content)
        .assert()
        .success()
        .get_output()
        .clone();

    let json = serde_json::from_slice(&output.stdout).expect("ini output is JSON");
    (json, String::from_utf8_lossy(&output.stderr).to_string())
}

// =============================================================================
// ini
// =============================================================================

#[test]
fn test_ini_sections_and_comments() {
    let env = TestEnv::new();

    let (json, stderr) = ini_json(&env, &[], "[a]\nx=1\n; comment\ny = 2\n[b]\n");

    assert_eq!(json, json!({"a": {"x": "1", "y": "2"}}));
    assert!(stderr.is_empty());
}

#[test]
fn test_ini_hoists_sectionless_keys() {
    let env = TestEnv::new();

    let (json, _) = ini_json(&env, &[], "z=9\n[a]\nx=1\n");

    assert_eq!(json, json!({"z": "9", "a": {"x": "1"}}));
}

#[test]
fn test_ini_colliding_sectionless_key_stays_nested() {
    let env = TestEnv::new();

    let (json, _) = ini_json(&env, &[], "a=top\n[a]\nx=1\n");

    assert_eq!(json, json!({"": {"a": "top"}, "a": {"x": "1"}}));
}

#[test]
fn test_ini_names_ignore_case() {
    let env = TestEnv::new();

    let (json, _) = ini_json(&env, &[], "A=top\n[Server]\nPort=1\nport=2\n[a]\nx=1\n");

    assert_eq!(
        json,
        json!({"": {"A": "top"}, "Server": {"Port": "2"}, "a": {"x": "1"}})
    );
}

#[test]
fn test_ini_warns_on_unrecognized_lines() {
    let env = TestEnv::new();

    let (json, stderr) = ini_json(&env, &[], "[s]\nnot a pair\nk=v\n");

    assert_eq!(json, json!({"s": {"k": "v"}}));
    assert!(stderr.contains("warning: line 2: unrecognized content 'not a pair'"));
}

#[test]
fn test_ini_reads_file_argument() {
    let env = TestEnv::new();
    let path = env.write_file("app.ini", "[server]\nport = 8080\nhost = example.org\n");

    env.sk()
        .arg("ini")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": \"8080\""))
        .stdout(predicate::str::contains("\"host\": \"example.org\""));
}

#[test]
fn test_ini_comment_marker_and_keep_empty_flags() {
    let env = TestEnv::new();

    let (json, _) = ini_json(
        &env,
        &["--comment", "#", "--keep-empty"],
        "[a]\n[b]\nk=v # note\nsemi=x;y\n",
    );

    assert_eq!(json, json!({"": {}, "a": {}, "b": {"k": "v", "semi": "x;y"}}));
}

#[test]
fn test_ini_uses_configured_comment_marker() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().comment_marker("#").build());

    let (json, _) = ini_json(&env, &[], "[s]\nk=v # note\n");

    assert_eq!(json, json!({"s": {"k": "v"}}));
}

// =============================================================================
// render
// =============================================================================

#[test]
fn test_render_once_per_record() {
    let env = TestEnv::new();

    env.sk()
        .args(["render", "{Name} is {Age}"])
        .write_stdin("{\"Name\": \"Bob\", \"Age\": 30}\n{\"Name\": \"Ann\", \"Age\": 41}\n")
        .assert()
        .success()
        .stdout("Bob is 30\nAnn is 41\n");
}

#[test]
fn test_render_falls_back_to_vars_and_keeps_unknown() {
    let env = TestEnv::new();

    env.sk()
        .args(["render", "{Name} is {Age} {Missing}", "--var", "Age=30"])
        .write_stdin("{\"Name\": \"Bob\"}\n")
        .assert()
        .success()
        .stdout("Bob is 30 {Missing}\n");
}

#[test]
fn test_render_does_not_expand_substituted_values() {
    let env = TestEnv::new();

    env.sk()
        .args(["render", "{Name} is {Age}", "--var", "Age=30"])
        .write_stdin("{\"Name\": \"{Age}\"}\n")
        .assert()
        .success()
        .stdout("{Age} is 30\n");
}

#[test]
fn test_render_empty_field_falls_through() {
    let env = TestEnv::new();

    env.sk()
        .args(["render", "[{Name}]", "--var", "Name=anon"])
        .write_stdin("{\"Name\": \"\"}\n")
        .assert()
        .success()
        .stdout("[anon]\n");
}

#[test]
fn test_render_config_variables_and_environment() {
    let env = TestEnv::new();
    env.write_global_config(
        &GlobalConfigBuilder::new()
            .variable("team", "infra")
            .build(),
    );

    env.sk()
        .args(["render", "--no-input", "{team} on {SK_TEST_HOST}"])
        .env("SK_TEST_HOST", "build-01")
        .assert()
        .success()
        .stdout("infra on build-01\n");
}

#[test]
fn test_render_var_overrides_config_variable() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().variable("team", "infra").build());

    env.sk()
        .args(["render", "--no-input", "{team}", "--var", "team=web"])
        .assert()
        .success()
        .stdout("web\n");
}

#[test]
fn test_render_rejects_malformed_var() {
    let env = TestEnv::new();

    env.sk()
        .args(["render", "--no-input", "{x}", "--var", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

// =============================================================================
// parse
// =============================================================================

#[test]
fn test_parse_bare_values_skip_mismatches() {
    let env = TestEnv::new();

    env.sk()
        .args(["parse", r"version (\S+)"])
        .write_stdin("app version 1.2\nnoise\nlib version 0.9\n")
        .assert()
        .success()
        .stdout("1.2\n0.9\n");
}

#[test]
fn test_parse_named_groups_into_records() {
    let env = TestEnv::new();

    env.sk()
        .args(["parse", r"^(\w+)\s+(\d+)", "--name", "user", "--name", "pid"])
        .write_stdin("root 1\nalice 42\n")
        .assert()
        .success()
        .stdout("{\"user\":\"root\",\"pid\":\"1\"}\n{\"user\":\"alice\",\"pid\":\"42\"}\n");
}

#[test]
fn test_parse_enforce_fails_on_mismatch() {
    let env = TestEnv::new();

    env.sk()
        .args(["parse", r"^(\d+)$", "--enforce"])
        .write_stdin("1\nx\n2\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line does not match pattern: x"));
}

#[test]
fn test_parse_is_case_sensitive() {
    let env = TestEnv::new();

    env.sk()
        .args(["parse", "^Error: (.*)$"])
        .write_stdin("Error: disk\nerror: net\n")
        .assert()
        .success()
        .stdout("disk\n");
}

// =============================================================================
// paint
// =============================================================================

#[test]
fn test_paint_without_terminal_is_plain() {
    let env = TestEnv::new();

    env.sk()
        .args(["paint", "green", "all", "good"])
        .assert()
        .success()
        .stdout("all good\n");

    env.sk()
        .args(["paint", "-n", "dark-red", "x"])
        .assert()
        .success()
        .stdout("x");
}

#[test]
fn test_paint_unknown_color_fails() {
    let env = TestEnv::new();

    env.sk()
        .args(["paint", "plaid", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color 'plaid'"));
}
