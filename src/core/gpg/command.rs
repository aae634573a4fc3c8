//! Argument lists for the gpg program.
//!
//! A [`GpgCommand`] is built by chaining calls that each consume the
//! builder and hand back the extended one. It yields the real argument
//! vector for execution and a redacted rendering for logs and errors.

use std::fmt;
use std::path::Path;

use crate::core::constants::REDACTED;

const PASSPHRASE_FLAG: &str = "--passphrase";

/// An ordered gpg invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct GpgCommand {
    program: String,
    args: Vec<String>,
}

impl GpgCommand {
    /// Start a command with its operation, e.g. `--list-keys`.
    pub fn new(program: impl Into<String>, operation: &str) -> Self {
        Self {
            program: program.into(),
            args: vec![operation.to_string()],
        }
    }

    /// Append a bare flag such as `--batch`.
    pub fn flag(mut self, flag: &str) -> Self {
        self.args.push(flag.to_string());
        self
    }

    /// Append a positional argument; an empty argument appends nothing.
    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_string());
        }
        self
    }

    /// Append a path as a positional argument.
    pub fn path(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }

    /// Append `<option> <value>`.
    pub fn option(mut self, option: &str, value: impl AsRef<str>) -> Self {
        self.args.push(option.to_string());
        self.args.push(value.as_ref().to_string());
        self
    }

    /// Append `--output <path>`.
    pub fn output(self, path: &Path) -> Self {
        self.option("--output", path.to_string_lossy())
    }

    /// Hand a passphrase to gpg without going through an agent prompt.
    pub fn passphrase(self, passphrase: &str) -> Self {
        self.option("--pinentry-mode", "loopback")
            .option(PASSPHRASE_FLAG, passphrase)
    }

    /// Program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments to pass to the program. Contains secrets.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The operation this command performs (its first argument).
    pub fn operation(&self) -> &str {
        &self.args[0]
    }

    /// Value following `option`, if present.
    pub fn option_value(&self, option: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == option)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }

    /// True if `flag` appears anywhere in the arguments.
    pub fn has(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Last argument, usually the key the command operates on.
    pub fn last_arg(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }

    fn secrets(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut iter = self.args.iter();
        while let Some(arg) = iter.next() {
            if arg == PASSPHRASE_FLAG {
                if let Some(secret) = iter.next() {
                    out.push(secret.as_str());
                }
            }
        }
        out
    }

    /// Arguments with every passphrase value masked.
    pub fn redacted_args(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.args.len());
        let mut mask_next = false;
        for arg in &self.args {
            if mask_next {
                out.push(REDACTED);
                mask_next = false;
            } else {
                out.push(arg.as_str());
                mask_next = arg == PASSPHRASE_FLAG;
            }
        }
        out
    }

    /// Mask every passphrase this command carries inside arbitrary text,
    /// such as tool diagnostics.
    pub fn redact_text(&self, text: &str) -> String {
        let mut out = text.to_string();
        for secret in self.secrets() {
            if !secret.is_empty() {
                out = out.replace(secret, REDACTED);
            }
        }
        out
    }

    /// Loggable rendering of the command. Never use it for execution.
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in self.redacted_args() {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}

impl fmt::Display for GpgCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl fmt::Debug for GpgCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GpgCommand").field(&self.display()).finish()
    }
}
