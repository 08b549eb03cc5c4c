//! Integration tests for the goinit binary.
//!
//! Everything here runs without a generator service: `--offline` keeps the
//! selection commands off the network, and the one connectivity test points
//! at a port nothing listens on.

use assert_cmd::Command;
use predicates::prelude::*;

fn goinit() -> Command {
    let mut cmd = Command::cargo_bin("goinit").unwrap();
    // Keep host configuration out of the tests.
    cmd.env_remove("GOINIT_SERVICE_URL")
        .env_remove("GOINIT_TIMEOUT_SECS")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_commands() {
    goinit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("meta"));
}

#[test]
fn version_matches_cargo() {
    goinit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    goinit().assert().failure();
}

#[test]
fn unknown_project_type_is_a_user_error() {
    goinit()
        .args(["preview", "--type", "webapp", "--offline"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("webapp"))
        .stderr(predicate::str::contains("microservice"));
}

#[test]
fn unknown_framework_is_a_user_error() {
    goinit()
        .args(["generate", "--framework", "rails", "--offline"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("rails"));
}

#[test]
fn incompatible_framework_is_a_user_error() {
    goinit()
        .args([
            "generate",
            "--type",
            "microservice",
            "--framework",
            "cobra",
            "--offline",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cobra"))
        .stderr(predicate::str::contains("Compatible frameworks"))
        .stderr(predicate::str::contains("gin"));
}

#[test]
fn blank_fields_block_generate_before_any_request() {
    goinit()
        .args(["generate", "--offline"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Module Name is required."))
        .stderr(predicate::str::contains("Name is required."))
        .stderr(predicate::str::contains("Description is required."));
}

#[test]
fn unreachable_service_is_a_service_error() {
    goinit()
        .args(["meta", "--service-url", "http://127.0.0.1:1/api"])
        .env("GOINIT_TIMEOUT_SECS", "2")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("network error"));
}

#[test]
fn completions_bash_mentions_binary() {
    goinit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goinit"));
}

#[test]
fn config_list_shows_defaults() {
    goinit()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8181/api"));
}

#[test]
fn config_get_unknown_key_is_a_config_error() {
    goinit()
        .args(["config", "get", "does.not.exist"])
        .assert()
        .code(4);
}

#[test]
fn config_path_prints_a_path() {
    goinit()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn explicit_missing_config_file_fails() {
    goinit()
        .args(["--config", "/definitely/not/here.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn quiet_and_verbose_conflict() {
    goinit().args(["--quiet", "--verbose", "meta"]).assert().code(2);
}
