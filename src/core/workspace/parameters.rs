//! Batch key-generation parameters file.

use crate::core::constants::KEY_PREFERENCES;
use crate::core::domain::UserIdentity;

/// RSA sizes for the generated master key and its companion subkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySizes {
    pub key_length: u32,
    pub subkey_length: u32,
}

/// Render unattended key-generation parameters for `identity`.
///
/// Sign-only RSA master key, an RSA encryption subkey, the algorithm
/// preference list and the user's name, email and expiry.
pub fn render(identity: &UserIdentity, sizes: KeySizes) -> String {
    format!(
        "Key-Type: RSA\n\
         Key-Length: {key_length}\n\
         Key-Usage: sign\n\
         Subkey-Type: RSA\n\
         Subkey-Length: {subkey_length}\n\
         Subkey-Usage: encrypt\n\
         Name-Real: {name}\n\
         Name-Email: {email}\n\
         Expire-Date: {expiry}\n\
         Preferences: {prefs}\n\
         %commit\n",
        key_length = sizes.key_length,
        subkey_length = sizes.subkey_length,
        name = identity.full_name(),
        email = identity.email(),
        expiry = identity.expiry(),
        prefs = KEY_PREFERENCES,
    )
}
