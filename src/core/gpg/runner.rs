//! Process execution for gpg commands.
//!
//! The [`Runner`] trait is the seam between keysmith and the outside
//! world: the real implementation spawns processes, tests script one.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::command::GpgCommand;

/// How the child's output streams are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Collect stdout and stderr.
    Captured,
    /// Stream straight to the user's terminal.
    Inherit,
}

/// Result of running a command to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub success: bool,
    /// Exit code, `None` if killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// A successful run with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Executes gpg commands.
pub trait Runner {
    /// Resolve a program on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run a command to completion. Blocks until the child exits.
    fn run(&self, command: &GpgCommand, capture: Capture) -> std::io::Result<RunOutput>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        (**self).locate(program)
    }

    fn run(&self, command: &GpgCommand, capture: Capture) -> std::io::Result<RunOutput> {
        (**self).run(command, capture)
    }
}

/// Runs commands as child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = which::which(program).ok();
        trace!(program, found = ?found, "locating program");
        found
    }

    fn run(&self, command: &GpgCommand, capture: Capture) -> std::io::Result<RunOutput> {
        debug!(command = %command, "running");

        let mut cmd = Command::new(command.program());
        cmd.args(command.args()).stdin(Stdio::null());

        match capture {
            Capture::Captured => {
                let output = cmd.output()?;
                Ok(RunOutput {
                    success: output.status.success(),
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
            Capture::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()?;
                Ok(RunOutput {
                    success: status.success(),
                    code: status.code(),
                    ..RunOutput::default()
                })
            }
        }
    }
}
