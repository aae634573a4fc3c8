//! Tests for the generate command.

use crate::support::*;

#[test]
fn test_generate_without_gpg_fails_before_prompting() {
    let t = Test::new();

    let output = t.cmd_without_gpg().arg("generate").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "could not be found");
    assert!(!stdout(&output).contains("Welcome"));
}

#[test]
fn test_generate_without_gpg_leaves_no_workspace() {
    let t = Test::new();

    let output = t
        .cmd_without_gpg()
        .args(["generate", "--debug"])
        .output()
        .unwrap();
    assert_exit_code(&output, 1);
    assert_eq!(std::fs::read_dir(t.tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_generate_rejects_unknown_flag() {
    let t = Test::new();

    let output = t.cmd().args(["generate", "--batch"]).output().unwrap();
    assert_exit_code(&output, 2);
}
