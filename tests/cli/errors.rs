//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn test_version() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("keysmith "));
}

#[test]
fn test_generate_help_mentions_debug() {
    let t = Test::new();

    t.cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_exit_code(&output, 2);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_unknown_log_level_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--log-level", "chatty", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert_stderr_contains(&output, "chatty");
}

#[test]
fn test_all_log_levels_accepted() {
    let t = Test::new();

    for level in ["debug", "info", "warn", "error", "fatal", "panic"] {
        let output = t
            .cmd()
            .args(["--log-level", level, "remove", "short"])
            .output()
            .unwrap();
        // parsed fine, then failed on the fingerprint
        assert_exit_code(&output, 1);
    }
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();

    let output = t.cmd_without_gpg().args(["-v", "list"]).output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "checking gpg is installed");
    assert!(!stdout(&output).contains("checking gpg"));
}

#[test]
fn test_invalid_config_file() {
    let t = Test::with_config("key_length = \"big\"\n");

    let output = t.cmd().arg("list").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "invalid config file");
}

#[test]
fn test_unknown_config_key_rejected() {
    let t = Test::with_config("gpg_binary = \"gpg2\"\n");

    let output = t.cmd().arg("list").output().unwrap();
    assert_exit_code(&output, 1);
}

#[test]
fn test_out_of_range_key_length_rejected() {
    let t = Test::with_config("key_length = 512\n");

    let output = t.cmd().arg("list").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "key_length");
}

#[test]
fn test_missing_explicit_config_file() {
    let mut t = Test::new();
    t.config = Some(t.home.path().join("absent.toml"));

    let output = t.cmd().arg("list").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "could not read config file");
}

#[test]
fn test_config_program_is_used() {
    let t = Test::with_config("gpg_program = \"/no/such/dir/gpg-from-config\"\n");

    let output = t.cmd().arg("list").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "gpg-from-config could not be found");
}
