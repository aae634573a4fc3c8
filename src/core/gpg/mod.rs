//! GnuPG key-management client.
//!
//! Every key operation keysmith needs is one method here. Each builds a
//! [`GpgCommand`], runs it to completion through a [`Runner`] and maps a
//! non-zero exit to a [`ToolError`] with passphrases masked. Nothing is
//! retried; the caller decides what a failure means for the run.
//!
//! ## Requirements
//!
//! - `gpg` (GnuPG 2.1 or later) must be installed and on PATH
//! - loopback pinentry must be allowed by the agent (the default)

pub mod command;
pub mod runner;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::core::cancel::CancelToken;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::{Fingerprint, KeyIdFormat, Passphrase};
use crate::error::{Error, ParseError, Result, ToolError};

pub use command::GpgCommand;
pub use runner::{Capture, ProcessRunner, Runner, RunOutput};

/// Client for the gpg program.
pub struct Gpg<R = ProcessRunner> {
    runner: R,
    program: String,
    homedir: Option<PathBuf>,
    cancel: CancelToken,
}

impl<R: Runner> Gpg<R> {
    /// Create a client using the program and keyring from `config`.
    pub fn new(runner: R, config: &Config, cancel: CancelToken) -> Self {
        Self {
            runner,
            program: config.gpg_program.clone(),
            homedir: config.gnupg_home.clone(),
            cancel,
        }
    }

    /// The runner commands are executed through.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn command(&self, operation: &str) -> GpgCommand {
        let cmd = GpgCommand::new(self.program.as_str(), operation);
        match &self.homedir {
            Some(home) => cmd.option("--homedir", home.to_string_lossy()),
            None => cmd,
        }
    }

    fn execute(&self, command: &GpgCommand, capture: Capture) -> Result<RunOutput> {
        let output = self.runner.run(command, capture).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::ToolUnavailable {
                    program: self.program.clone(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        if !output.success {
            // gpg dies on the same SIGINT the user sent us
            self.cancel.check()?;
            return Err(ToolError {
                command: command.display(),
                code: output.code,
                diagnostic: command.redact_text(&output.stderr),
            }
            .into());
        }
        trace!(command = %command, "succeeded");
        Ok(output)
    }

    /// Check the gpg program can be found.
    ///
    /// # Errors
    ///
    /// Returns `Error::ToolUnavailable` when it is not on PATH.
    pub fn check_installed(&self) -> Result<PathBuf> {
        debug!(program = %self.program, "checking gpg is installed");
        self.runner
            .locate(&self.program)
            .ok_or_else(|| Error::ToolUnavailable {
                program: self.program.clone(),
            })
    }

    /// Print public (or secret) keys to the terminal, optionally filtered.
    pub fn list_keys(&self, secret: bool, format: KeyIdFormat, filter: &str) -> Result<()> {
        let operation = if secret {
            "--list-secret-keys"
        } else {
            "--list-keys"
        };
        let cmd = self
            .command(operation)
            .option("--keyid-format", format.as_str())
            .arg(filter);
        self.execute(&cmd, Capture::Inherit)?;
        Ok(())
    }

    /// Delete both secret and public key material for a key.
    pub fn delete_entire_key(&self, fingerprint: &Fingerprint) -> Result<()> {
        let cmd = self
            .command("--delete-secret-and-public-keys")
            .flag("--batch")
            .flag("--yes")
            .arg(fingerprint);
        self.execute(&cmd, Capture::Inherit)?;
        Ok(())
    }

    /// Delete the secret keys (master and subkeys) of a key, keeping the public part.
    pub fn delete_secret_keys(&self, passphrase: &Passphrase, fingerprint: &Fingerprint) -> Result<()> {
        let cmd = self
            .command("--delete-secret-keys")
            .flag("--batch")
            .flag("--yes")
            .passphrase(passphrase.expose())
            .arg(fingerprint);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }

    /// Generate the master keypair from a batch parameters file.
    ///
    /// The resulting key id is written to `status_path` as a
    /// `KEY_CREATED` line.
    pub fn generate_master_keypair(
        &self,
        passphrase: &Passphrase,
        status_path: &Path,
        parameters_path: &Path,
    ) -> Result<()> {
        let cmd = self
            .command("--generate-key")
            .flag("--no-tty")
            .flag("--batch")
            .passphrase(passphrase.expose())
            .option("--status-file", status_path.to_string_lossy())
            .path(parameters_path);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }

    /// Resolve a key id to its fingerprint as gpg prints it.
    pub fn key_fingerprint(&self, key_id: &str) -> Result<String> {
        let cmd = self.command("--fingerprint").arg(key_id);
        let output = self.execute(&cmd, Capture::Captured)?;
        parse_fingerprint(&output.stdout)
    }

    /// Add an RSA-4096 signing subkey to the master key.
    pub fn add_signing_subkey(
        &self,
        passphrase: &Passphrase,
        master: &Fingerprint,
        expiry: &str,
    ) -> Result<()> {
        let fingerprint = self.key_fingerprint(master.as_str())?;
        debug!(fingerprint = %fingerprint, expiry, "adding signing subkey");

        let cmd = self
            .command("--quick-add-key")
            .flag("--no-tty")
            .flag("--batch")
            .passphrase(passphrase.expose())
            .arg(&fingerprint)
            .arg(constants::SIGNING_SUBKEY_ALGO)
            .arg("sign")
            .arg(expiry);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }

    /// Generate a revocation certificate for the master key.
    ///
    /// The revoke dialogue is answered from a short-lived command file in
    /// `workspace_dir`, removed again whether or not gpg succeeds.
    pub fn create_revocation_certificate(
        &self,
        workspace_dir: &Path,
        passphrase: &Passphrase,
        output: &Path,
        master: &Fingerprint,
    ) -> Result<()> {
        let answers = TransientFile::create(
            workspace_dir.join(constants::REVOCATION_COMMAND_FILE),
            constants::REVOCATION_ANSWERS,
        )?;

        let cmd = self
            .command("--gen-revoke")
            .flag("--no-tty")
            .flag("--yes")
            .passphrase(passphrase.expose())
            .option("--command-file", answers.path().to_string_lossy())
            .output(output)
            .arg(master);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }

    /// Export the armored public master key.
    pub fn export_public_master_key(&self, master: &Fingerprint, output: &Path) -> Result<()> {
        let cmd = self
            .command("--export")
            .flag("--armor")
            .flag("--yes")
            .output(output)
            .arg(master);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }

    /// Export the armored private master key (including subkeys).
    pub fn export_private_master_key(
        &self,
        passphrase: &Passphrase,
        master: &Fingerprint,
        output: &Path,
    ) -> Result<()> {
        let cmd = self
            .command("--export-secret-keys")
            .flag("--armor")
            .flag("--yes")
            .passphrase(passphrase.expose())
            .output(output)
            .arg(master);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }

    /// Export the armored secret subkeys without the master secret.
    pub fn export_signing_subkey(
        &self,
        passphrase: &Passphrase,
        master: &Fingerprint,
        output: &Path,
    ) -> Result<()> {
        let cmd = self
            .command("--export-secret-subkeys")
            .flag("--armor")
            .flag("--yes")
            .passphrase(passphrase.expose())
            .output(output)
            .arg(master);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }

    /// Import key material from a file.
    pub fn import_key(&self, passphrase: &Passphrase, path: &Path) -> Result<()> {
        let cmd = self
            .command("--import")
            .flag("--batch")
            .passphrase(passphrase.expose())
            .path(path);
        self.execute(&cmd, Capture::Captured)?;
        Ok(())
    }
}

/// Extract the fingerprint from `gpg --fingerprint` output.
///
/// The fingerprint is the second line; whitespace runs are collapsed to
/// single spaces.
///
/// # Errors
///
/// Returns `ParseError::Fingerprint` when there is no non-blank second line.
pub fn parse_fingerprint(output: &str) -> Result<String> {
    let line = output.lines().nth(1).ok_or(ParseError::Fingerprint)?;
    let fingerprint = line.split_whitespace().collect::<Vec<_>>().join(" ");
    if fingerprint.is_empty() {
        return Err(ParseError::Fingerprint.into());
    }
    Ok(fingerprint)
}

/// A file that is deleted when dropped.
struct TransientFile {
    path: PathBuf,
}

impl TransientFile {
    fn create(path: PathBuf, contents: &str) -> Result<Self> {
        fs::write(&path, contents).map_err(|source| crate::error::WorkspaceError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "could not remove transient file");
        }
    }
}
