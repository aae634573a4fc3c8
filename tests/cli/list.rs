//! Tests for the list command.

use crate::support::*;

#[test]
fn test_list_without_gpg() {
    let t = Test::new();

    let output = t.cmd_without_gpg().arg("list").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "could not be found");
}

#[test]
fn test_list_secret_long_without_gpg() {
    let t = Test::new();

    let output = t
        .cmd_without_gpg()
        .args(["list", "--secret", "--long"])
        .output()
        .unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "install GnuPG");
}

#[test]
fn test_ls_alias() {
    let t = Test::new();

    let output = t.cmd_without_gpg().arg("ls").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "could not be found");
}

#[test]
fn test_list_rejects_positional_args() {
    let t = Test::new();

    let output = t.list(&["extra"]);
    assert_exit_code(&output, 2);
}
