//! Per-run temporary workspace.
//!
//! Layout under the temp root:
//!
//! ```text
//! keysmith-20240101_120000/
//! ├── parameters                        # batch key-generation parameters
//! ├── status                            # gpg --status-file output
//! └── keys/
//!     ├── .revocation-certificate.asc
//!     ├── .public-master.gpg
//!     ├── .private-master.gpg
//!     └── .signing-subkey.gpg
//! ```
//!
//! `keys/` holds private key material and is removed at the end of every
//! run. The rest is removed too unless the run asked to keep it.

mod parameters;
mod status;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::{Fingerprint, UserIdentity};
use crate::error::{Result, WorkspaceError};

pub use parameters::KeySizes;
pub use status::parse_created_key_id;

/// The temporary directory owned by one generate run.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    sizes: KeySizes,
    /// Debug runs share one fixed directory; any other run owns its root
    /// exclusively.
    reuse: bool,
}

impl Workspace {
    /// Workspace under `parent`.
    ///
    /// Debug runs reuse one fixed name so the files can be inspected
    /// afterwards; normal runs get a timestamped name.
    pub fn new(parent: &Path, debug: bool, sizes: KeySizes) -> Self {
        let name = if debug {
            constants::DEBUG_WORKSPACE_NAME.to_string()
        } else {
            format!(
                "{}{}",
                constants::WORKSPACE_PREFIX,
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            )
        };
        Self {
            root: parent.join(name),
            sizes,
            reuse: debug,
        }
    }

    /// Workspace under the configured temp root with configured key sizes.
    pub fn from_config(config: &Config, debug: bool) -> Self {
        Self::new(
            &config.temp_root(),
            debug,
            KeySizes {
                key_length: config.key_length,
                subkey_length: config.subkey_length,
            },
        )
    }

    /// Create the root and the exported-keys directory.
    ///
    /// Outside debug mode the root must not exist yet, so two runs never
    /// share a workspace.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Create` on permission or disk failure, or
    /// when a non-debug root already exists.
    pub fn create(&self) -> Result<()> {
        debug!(path = %self.root.display(), "creating temporary directory");
        let create = |dir: &Path, exclusive: bool| -> Result<()> {
            let made = if exclusive {
                fs::create_dir(dir)
            } else {
                fs::create_dir_all(dir)
            };
            made.and_then(|()| restrict_to_owner(dir))
                .map_err(|source| WorkspaceError::Create {
                    path: dir.to_path_buf(),
                    source,
                })?;
            Ok(())
        };

        if let Some(parent) = self.root.parent() {
            fs::create_dir_all(parent).map_err(|source| WorkspaceError::Create {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        create(&self.root, !self.reuse)?;
        create(&self.exported_keys_dir(), false)
    }

    /// Key sizes written into the parameters file.
    pub fn sizes(&self) -> KeySizes {
        self.sizes
    }

    /// Workspace root.
    pub fn path(&self) -> PathBuf {
        self.root.clone()
    }

    pub fn parameters_file(&self) -> PathBuf {
        self.root.join(constants::PARAMETERS_FILE)
    }

    pub fn status_file(&self) -> PathBuf {
        self.root.join(constants::STATUS_FILE)
    }

    /// Directory holding all exported key material.
    pub fn exported_keys_dir(&self) -> PathBuf {
        self.root.join(constants::EXPORTED_KEYS_DIR)
    }

    pub fn revocation_cert_file(&self) -> PathBuf {
        self.exported_keys_dir()
            .join(constants::REVOCATION_CERT_FILE)
    }

    pub fn public_master_key_file(&self) -> PathBuf {
        self.exported_keys_dir()
            .join(constants::PUBLIC_MASTER_KEY_FILE)
    }

    pub fn private_master_key_file(&self) -> PathBuf {
        self.exported_keys_dir()
            .join(constants::PRIVATE_MASTER_KEY_FILE)
    }

    pub fn signing_subkey_file(&self) -> PathBuf {
        self.exported_keys_dir().join(constants::SIGNING_SUBKEY_FILE)
    }

    /// Write the batch key-generation parameters for `identity`.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Write` if the file can't be written.
    pub fn write_parameters_file(&self, identity: &UserIdentity) -> Result<()> {
        let path = self.parameters_file();
        debug!(path = %path.display(), "writing parameters file");
        fs::write(&path, parameters::render(identity, self.sizes))
            .map_err(|source| WorkspaceError::Write { path, source })?;
        Ok(())
    }

    /// Read the generated master key id from the status file.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Read` if the file is missing, or a
    /// `ParseError` if it holds no valid `KEY_CREATED` line.
    pub fn read_generated_key_id(&self) -> Result<Fingerprint> {
        let path = self.status_file();
        let contents = fs::read_to_string(&path)
            .map_err(|source| WorkspaceError::Read { path, source })?;
        parse_created_key_id(&contents)
    }

    /// Remove the workspace, best effort.
    ///
    /// `keys/` is always removed; the root only when `keep_root` is false.
    /// Failures are collected rather than returned so cleanup never masks
    /// the run's own outcome.
    pub fn cleanup(&self, keep_root: bool) -> CleanupReport {
        let mut report = CleanupReport::default();

        debug!("removing exported keys directory");
        remove_dir(&self.exported_keys_dir(), &mut report);

        if !keep_root {
            debug!("removing temporary directory");
            remove_dir(&self.root, &mut report);
        }
        report
    }
}

/// Paths that could not be removed during cleanup.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub failures: Vec<(PathBuf, io::Error)>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn remove_dir(path: &Path, report: &mut CleanupReport) {
    match fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not remove temporary files");
            report.failures.push((path.to_path_buf(), e));
        }
    }
}

#[cfg(unix)]
fn restrict_to_owner(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
}

#[cfg(not(unix))]
fn restrict_to_owner(_dir: &Path) -> io::Result<()> {
    Ok(())
}
