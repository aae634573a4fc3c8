//! The generate workflow.
//!
//! Walks one run from an empty machine to "master key offline, signing
//! subkey local":
//!
//! ```text
//! Idle → ToolChecked → WorkspaceReady → IdentityCollected
//!      → MasterKeyGenerated → SubkeyAdded → RevocationCertCreated
//!      → KeysExported → BackupConfirmed → MasterKeyRemoved → Done
//! ```
//!
//! Any step can end the run in `Failed`; any prompt or step boundary can
//! end it in `Cancelled`. Completed gpg operations are never rolled back.
//! A workspace the run created is cleaned up afterwards, whatever the end
//! state.

use tracing::{debug, warn};

use crate::core::cancel::CancelToken;
use crate::core::domain::{Fingerprint, KeyIdFormat, Passphrase, UserIdentity};
use crate::core::gpg::{Gpg, Runner};
use crate::core::ui::{get_passphrase, TextPrompt, Ui};
use crate::core::validation::{validate_email, validate_expiry, validate_name};
use crate::core::workspace::{CleanupReport, Workspace};
use crate::error::{Error, Result};

const WELCOME: &str = "Welcome! This program will guide you through generating a secure GPG keypair.\n\
The program will generate a master keypair (public and private keys) that should be stored in a safe place.\n\
In addition, the program will generate a signing subkey to use on this computer.\n\
Finally, the program will remove the master keypair (after ensuring it is backed up!) and import the \
signing subkey, so the master key can not be obtained from this computer.\n\
At any time you can press Ctrl-C to quit.";

const EXPIRY_HELP: &str = "Input is '<n>w|m|y', where n is an integer\n\
Input 0 for a keypair that never expires (NOT RECOMMENDED)\n\
The default, recommended, value is '1y'";

/// Position of a run in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ToolChecked,
    WorkspaceReady,
    IdentityCollected,
    MasterKeyGenerated,
    SubkeyAdded,
    RevocationCertCreated,
    KeysExported,
    BackupConfirmed,
    MasterKeyRemoved,
    Done,
    Failed,
    Cancelled,
}

/// How a run ended.
#[derive(Debug)]
pub struct Outcome {
    /// Terminal stage: `Done`, `Failed` or `Cancelled`.
    pub stage: Stage,
    /// Last stage completed before the run ended.
    pub reached: Stage,
    /// Master key fingerprint, once generated.
    pub master: Option<Fingerprint>,
    pub result: Result<()>,
    pub cleanup: CleanupReport,
}

/// One generate run.
pub struct KeyGeneration<'a, R: Runner, U: Ui + ?Sized> {
    gpg: &'a Gpg<R>,
    ui: &'a U,
    workspace: Workspace,
    cancel: CancelToken,
    keep_workspace: bool,
    default_expiry: String,
    stage: Stage,
    master: Option<Fingerprint>,
    /// Set once this run created the workspace; only then is it cleaned up.
    owns_workspace: bool,
}

impl<'a, R: Runner, U: Ui + ?Sized> KeyGeneration<'a, R, U> {
    pub fn new(gpg: &'a Gpg<R>, ui: &'a U, workspace: Workspace, cancel: CancelToken) -> Self {
        Self {
            gpg,
            ui,
            workspace,
            cancel,
            keep_workspace: false,
            default_expiry: crate::core::constants::DEFAULT_EXPIRY.to_string(),
            stage: Stage::Idle,
            master: None,
            owns_workspace: false,
        }
    }

    /// Keep the workspace root (not the exported keys) after the run.
    pub fn keep_workspace(mut self, keep: bool) -> Self {
        self.keep_workspace = keep;
        self
    }

    /// Expiry offered when the user submits an empty answer.
    pub fn default_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.default_expiry = expiry.into();
        self
    }

    /// Run the workflow to an end state, then clean up.
    pub fn run(mut self) -> Outcome {
        let result = self.generate();
        let cleanup = self.cleanup();

        let stage = match &result {
            Ok(()) => Stage::Done,
            Err(Error::Cancelled) => Stage::Cancelled,
            Err(_) => Stage::Failed,
        };
        debug!(stage = ?stage, reached = ?self.stage, "generate run finished");

        Outcome {
            stage,
            reached: self.stage,
            master: self.master,
            result,
            cleanup,
        }
    }

    fn advance(&mut self, stage: Stage) {
        debug!(from = ?self.stage, to = ?stage, "stage");
        self.stage = stage;
    }

    /// Run a long operation behind the step indicator, honouring interrupts
    /// on both sides of it.
    fn step<T>(&self, label: &str, op: impl FnOnce() -> Result<T>) -> Result<T> {
        self.cancel.check()?;
        self.ui.step(label);
        let result = op();
        self.ui.step_done(result.is_ok());
        let value = result?;
        self.cancel.check()?;
        Ok(value)
    }

    fn generate(&mut self) -> Result<()> {
        self.gpg.check_installed()?;
        self.advance(Stage::ToolChecked);

        self.ui.info(WELCOME);

        self.workspace.create()?;
        self.owns_workspace = true;
        self.advance(Stage::WorkspaceReady);

        self.ui
            .info("In order to generate a GPG keypair, we need some information about you");
        let identity = self.collect_identity()?;
        self.advance(Stage::IdentityCollected);

        self.ui
            .info("The master keypair will be protected by a passphrase");
        self.ui
            .warn("Ensure that you keep this passphrase in a safe place (e.g. a key vault)!");
        let passphrase = get_passphrase(self.ui)?;
        self.cancel.check()?;

        let master = self.generate_master_keypair(&identity, &passphrase)?;
        self.master = Some(master.clone());
        self.advance(Stage::MasterKeyGenerated);

        self.step("Adding a signing subkey for use on this computer", || {
            self.gpg
                .add_signing_subkey(&passphrase, &master, identity.expiry())
        })?;
        self.advance(Stage::SubkeyAdded);

        let revocation_cert = self.workspace.revocation_cert_file();
        debug!(path = %revocation_cert.display(), "creating revocation certificate");
        self.step("Creating revocation certificate", || {
            self.gpg.create_revocation_certificate(
                &self.workspace.path(),
                &passphrase,
                &revocation_cert,
                &master,
            )
        })?;
        self.advance(Stage::RevocationCertCreated);

        self.step("Exporting GPG keys", || self.export_keys(&passphrase, &master))?;
        self.advance(Stage::KeysExported);

        self.confirm_backup()?;
        self.advance(Stage::BackupConfirmed);

        self.step("Removing master keypair and reimporting signing subkey", || {
            self.remove_master_key(&passphrase, &master)
        })?;
        self.advance(Stage::MasterKeyRemoved);

        self.ui.info("Your generated GPG keypair is:");
        self.gpg.list_keys(true, KeyIdFormat::Long, master.as_str())?;
        self.ui.info(&format!(
            "Ensure that the key with SC attributes and the fingerprint '{}' is prepended by 'sec#'",
            master
        ));
        Ok(())
    }

    fn collect_identity(&self) -> Result<UserIdentity> {
        let name = TextPrompt::new("Please enter your (real) full name:", validate_name);
        let email = TextPrompt::new("Please enter your email address:", validate_email);
        let expiry = TextPrompt::new(
            "Please specify how long the key should be valid:",
            validate_expiry,
        )
        .with_help(EXPIRY_HELP)
        .with_default(self.default_expiry.as_str());

        loop {
            let identity = UserIdentity::new(
                self.ui.text(&name)?,
                self.ui.text(&email)?,
                self.ui.text(&expiry)?,
            )?;

            self.ui.info("You have entered:");
            self.ui.show(&identity.to_string());
            if self.ui.confirm("Is the entered information correct?")? {
                return Ok(identity);
            }
            debug!("identity rejected, asking again");
        }
    }

    fn generate_master_keypair(
        &self,
        identity: &UserIdentity,
        passphrase: &Passphrase,
    ) -> Result<Fingerprint> {
        self.workspace.write_parameters_file(identity)?;

        let label = format!(
            "Generating an RSA keypair with {} bit size",
            self.workspace.sizes().key_length
        );
        let master = self.step(&label, || {
            self.gpg.generate_master_keypair(
                passphrase,
                &self.workspace.status_file(),
                &self.workspace.parameters_file(),
            )?;
            self.workspace.read_generated_key_id()
        })?;
        debug!(fingerprint = %master, "generated master keypair");
        Ok(master)
    }

    /// Attempt all three exports, then fail if any of them failed.
    fn export_keys(&self, passphrase: &Passphrase, master: &Fingerprint) -> Result<()> {
        let ws = &self.workspace;
        let attempts = [
            (
                "public master key",
                self.gpg
                    .export_public_master_key(master, &ws.public_master_key_file()),
            ),
            (
                "private master key",
                self.gpg
                    .export_private_master_key(passphrase, master, &ws.private_master_key_file()),
            ),
            (
                "signing subkey",
                self.gpg
                    .export_signing_subkey(passphrase, master, &ws.signing_subkey_file()),
            ),
        ];

        let mut failed = Vec::new();
        for (what, result) in attempts {
            match result {
                Ok(()) => debug!(what, "exported"),
                Err(Error::Cancelled) => return Err(Error::Cancelled),
                Err(e) => {
                    warn!(what, error = %e, "export failed");
                    failed.push(what);
                }
            }
        }

        if failed.is_empty() {
            debug!(dir = %ws.exported_keys_dir().display(), "keys exported");
            Ok(())
        } else {
            Err(Error::ExportIncomplete {
                failed,
                dir: ws.exported_keys_dir(),
            })
        }
    }

    /// The only gate before the master secret key is deleted.
    fn confirm_backup(&self) -> Result<()> {
        self.ui.info(&format!(
            "Files exported to: {}",
            self.workspace.exported_keys_dir().display()
        ));
        self.ui.warn(
            "Ensure that these files are backed up (e.g. in a key vault)!\n\
             They will automatically be deleted after confirming they are backed up.",
        );
        loop {
            if self.ui.confirm("Have you backed up the files?")? {
                return self.cancel.check();
            }
        }
    }

    fn remove_master_key(&self, passphrase: &Passphrase, master: &Fingerprint) -> Result<()> {
        self.gpg.delete_secret_keys(passphrase, master)?;

        // The keyring holds no secret key from here on: whatever stops the
        // import, an interrupt included, is reported as a failed import.
        let subkey = self.workspace.signing_subkey_file();
        self.gpg
            .import_key(passphrase, &subkey)
            .map_err(|e| {
                warn!(path = %subkey.display(), error = %e, "signing subkey import failed");
                Error::SubkeyImport {
                    path: subkey.clone(),
                    source: Box::new(e),
                }
            })
    }

    fn cleanup(&self) -> CleanupReport {
        if !self.owns_workspace {
            return CleanupReport::default();
        }
        let report = self.workspace.cleanup(self.keep_workspace);
        for (path, e) in &report.failures {
            warn!(path = %path.display(), error = %e, "workspace cleanup failed");
            self.ui.error(&format!(
                "Failed to remove temporary files at '{}'. These files contain information \
                 about your keys and should be deleted if you intend to use the generated keys!",
                path.display()
            ));
        }
        if self.keep_workspace {
            self.ui.info(&format!(
                "Temporary directory kept at {}",
                self.workspace.path().display()
            ));
        }
        report
    }
}
