//! Generate command.
//!
//! Runs the full keypair workflow against the real gpg and terminal.

use crate::cli::output;
use crate::cli::prompt::ConsoleUi;
use crate::core::cancel::CancelToken;
use crate::core::config::Config;
use crate::core::gpg::{Gpg, ProcessRunner};
use crate::core::keygen::KeyGeneration;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Generate a master keypair and signing subkey.
pub fn execute(config: &Config, cancel: CancelToken, debug: bool) -> Result<()> {
    let gpg = Gpg::new(ProcessRunner, config, cancel.clone());
    let ui = ConsoleUi::new(cancel.clone());
    let workspace = Workspace::from_config(config, debug);

    let outcome = KeyGeneration::new(&gpg, &ui, workspace, cancel)
        .keep_workspace(debug)
        .default_expiry(config.default_expiry.as_str())
        .run();
    outcome.result?;

    output::blank();
    output::info("You may now want to add the signing subkey to your git config.");
    output::hint(&format!(
        "{}  (add {} to use it everywhere)",
        output::cmd("git config user.signingkey <key id>"),
        output::cmd("--global")
    ));
    output::dimmed("The key id is the 16 hex digits after 'sec#  rsa4096/' in the listing above.");
    Ok(())
}
