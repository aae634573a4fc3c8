//! Shared test data.

use keysmith::core::workspace::{KeySizes, Workspace};
use std::path::Path;

/// Fingerprint the fake gpg reports for every generated key.
pub const MASTER: &str = "0123456789ABCDEF0123456789ABCDEF01234567";

/// A well-formed fingerprint of a key nobody has.
pub const UNKNOWN_FINGERPRINT: &str = "FEDCBA9876543210FEDCBA9876543210FEDCBA98";

pub const PASSPHRASE: &str = "correct-horse-battery";

/// What `gpg --fingerprint` prints for [`MASTER`].
pub const FINGERPRINT_LISTING: &str = "pub   rsa4096 2024-01-01 [SC] [expires: 2025-01-01]\n      \
0123 4567 89AB CDEF 0123  4567 89AB CDEF 0123 4567\n\
uid           [ultimate] Ada Lovelace <ada@example.com>\n\
sub   rsa4096 2024-01-01 [E] [expires: 2025-01-01]\n";

pub fn workspace(parent: &Path, debug: bool) -> Workspace {
    Workspace::new(
        parent,
        debug,
        KeySizes {
            key_length: 4096,
            subkey_length: 4096,
        },
    )
}

/// Answers for a run where the user accepts everything the first time.
pub fn happy_answers() -> Vec<super::Answer> {
    use super::Answer::*;
    vec![
        Text("Ada Lovelace".into()),
        Text("ada@example.com".into()),
        Text(String::new()),
        Confirm(true),
        Secret(PASSPHRASE.into()),
        Secret(PASSPHRASE.into()),
        Confirm(true),
    ]
}
