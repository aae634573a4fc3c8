//! Keyring listing and removal.
//!
//! Thin journeys around single gpg calls: no workspace, no passphrase.

use tracing::debug;

use crate::core::domain::{Fingerprint, KeyIdFormat};
use crate::core::gpg::{Gpg, Runner};
use crate::core::ui::Ui;
use crate::error::Result;

/// What `remove_key` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    /// The user declined the confirmation.
    Kept,
}

/// Print public keys, or secret keys when `secret` is set.
pub fn list_keys<R: Runner>(gpg: &Gpg<R>, secret: bool, long: bool) -> Result<()> {
    gpg.check_installed()?;
    gpg.list_keys(secret, KeyIdFormat::from_long(long), "")
}

/// Delete a key (secret and public parts) by fingerprint.
///
/// The fingerprint is validated before anything else happens. Unless
/// `force` is set the user must confirm the deletion.
///
/// # Errors
///
/// Returns `ValidationError::InvalidFingerprint` for a malformed
/// fingerprint, `Error::Cancelled` on interrupt, or the gpg failure.
pub fn remove_key<R: Runner, U: Ui + ?Sized>(
    gpg: &Gpg<R>,
    ui: &U,
    fingerprint: &str,
    force: bool,
) -> Result<Removal> {
    let fingerprint = Fingerprint::new(fingerprint)?;
    gpg.check_installed()?;

    if !force {
        let prompt = format!(
            "Are you really sure you want to delete the key with fingerprint '{}'?",
            fingerprint
        );
        if !ui.confirm(&prompt)? {
            debug!(fingerprint = %fingerprint, "removal declined");
            return Ok(Removal::Kept);
        }
    }

    gpg.delete_entire_key(&fingerprint)?;
    Ok(Removal::Removed)
}
