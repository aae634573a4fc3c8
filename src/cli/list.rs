//! List command.

use crate::core::cancel::CancelToken;
use crate::core::config::Config;
use crate::core::gpg::{Gpg, ProcessRunner};
use crate::core::keys;
use crate::error::Result;

/// List public keys, or secret keys with `--secret`.
pub fn execute(config: &Config, cancel: CancelToken, long: bool, secret: bool) -> Result<()> {
    let gpg = Gpg::new(ProcessRunner, config, cancel);
    keys::list_keys(&gpg, secret, long)
}
