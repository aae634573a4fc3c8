//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keysmith command isolated from the user's environment.
    ///
    /// - HOME and XDG_CONFIG_HOME point into the temporary home
    /// - TMPDIR points at the test's temp root
    /// - colors are off and no outside config or gpg override leaks in
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keysmith").expect("failed to find keysmith binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("TMPDIR", self.tmp.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("KEYSMITH_GPG");
        cmd.env_remove("KEYSMITH_LOG");
        match &self.config {
            Some(path) => cmd.env("KEYSMITH_CONFIG", path),
            None => cmd.env_remove("KEYSMITH_CONFIG"),
        };
        cmd.write_stdin("");
        cmd
    }

    /// Command whose gpg program can never be found.
    pub fn cmd_without_gpg(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env(
            "KEYSMITH_GPG",
            self.home.path().join("no-such-dir").join("gpg"),
        );
        cmd
    }

    /// Shortcut for `keysmith list`.
    pub fn list(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("list")
            .args(args)
            .output()
            .expect("failed to run keysmith list")
    }

    /// Shortcut for `keysmith remove`.
    pub fn remove(&self, fingerprint: &str, force: bool) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["remove", fingerprint]);
        if force {
            cmd.arg("--force");
        }
        cmd.output().expect("failed to run keysmith remove")
    }
}
