//! Remove command.

use crate::cli::output;
use crate::cli::prompt::ConsoleUi;
use crate::core::cancel::CancelToken;
use crate::core::config::Config;
use crate::core::gpg::{Gpg, ProcessRunner};
use crate::core::keys::{self, Removal};
use crate::error::Result;

/// Delete a key by fingerprint, asking first unless forced.
pub fn execute(config: &Config, cancel: CancelToken, fingerprint: &str, force: bool) -> Result<()> {
    let gpg = Gpg::new(ProcessRunner, config, cancel.clone());
    let ui = ConsoleUi::new(cancel);

    match keys::remove_key(&gpg, &ui, fingerprint, force)? {
        Removal::Removed => output::success(&format!("successfully removed key '{}'", fingerprint)),
        Removal::Kept => output::dimmed("nothing removed"),
    }
    Ok(())
}
