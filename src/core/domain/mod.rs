//! Domain types.

mod fingerprint;
mod identity;
mod passphrase;

pub use fingerprint::{Fingerprint, KeyIdFormat};
pub use identity::UserIdentity;
pub use passphrase::Passphrase;
