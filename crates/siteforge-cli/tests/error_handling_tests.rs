//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn siteforge() -> Command {
    Command::cargo_bin("siteforge").unwrap()
}

#[test]
fn unknown_template_exits_not_found() {
    siteforge()
        .args(["export", "no-such-template"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("siteforge list"));
}

#[test]
fn unsupported_format_suggests_known_formats() {
    siteforge()
        .args(["export", "landing-01", "--format", "pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pdf"))
        .stderr(predicate::str::contains("html"))
        .stderr(predicate::str::contains("static"));
}

#[test]
fn malformed_customizations_exit_user_error() {
    siteforge()
        .args(["export", "landing-01", "--customizations", "{broken"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("customizations"));
}

#[test]
fn non_object_customizations_exit_user_error() {
    siteforge()
        .args(["export", "landing-01", "--customizations", "[1,2,3]"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn unknown_database_source_is_an_upstream_failure() {
    siteforge()
        .args(["generate", "--from", "database", "--source", "warehouse"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("warehouse"));
}

#[test]
fn missing_schema_file_exits_user_error() {
    siteforge()
        .args(["generate", "--from", "openapi", "--source", "/no/such.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("/no/such.json"));
}

#[test]
fn config_without_models_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let schema = temp.path().join("empty.json");
    std::fs::write(&schema, "{}").unwrap();

    siteforge()
        .args(["generate", "--from", "config", "--source"])
        .arg(&schema)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("models"));
}

#[test]
fn unknown_config_key_lists_known_keys() {
    siteforge()
        .args(["config", "get", "defaults.nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("defaults.format"));
}

#[test]
fn missing_explicit_config_file_exits_configuration() {
    siteforge()
        .args(["--config", "/no/such/config.toml", "list", "templates"])
        .assert()
        .code(4);
}

#[test]
fn no_arguments_shows_help_and_fails() {
    siteforge()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
