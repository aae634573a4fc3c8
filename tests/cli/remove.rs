//! Tests for the remove command.

use crate::support::*;

#[test]
fn test_remove_short_fingerprint() {
    let t = Test::new();

    let output = t.remove("ABCD1234", false);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "invalid fingerprint 'ABCD1234'");
    assert!(!stdout(&output).contains("Are you really sure"));
}

#[test]
fn test_remove_non_hex_fingerprint() {
    let t = Test::new();

    let output = t.remove("Z123456789ABCDEF0123456789ABCDEF01234567", true);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "invalid fingerprint");
}

#[test]
fn test_remove_requires_fingerprint() {
    let t = Test::new();

    let output = t.cmd().arg("remove").output().unwrap();
    assert_exit_code(&output, 2);
}

#[test]
fn test_remove_without_gpg() {
    let t = Test::new();

    let output = t
        .cmd_without_gpg()
        .args(["remove", UNKNOWN_FINGERPRINT, "--force"])
        .output()
        .unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "could not be found");
}

#[test]
fn test_remove_aliases() {
    let t = Test::new();

    for alias in ["rm", "delete"] {
        let output = t.cmd().args([alias, "short"]).output().unwrap();
        assert_exit_code(&output, 1);
        assert_stderr_contains(&output, "invalid fingerprint");
    }
}
