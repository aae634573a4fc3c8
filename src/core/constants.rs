//! Constants used throughout keysmith.
//!
//! Centralizes file names and fixed tool parameters.

/// Default key-management program, looked up on PATH.
pub const GPG_PROGRAM: &str = "gpg";

/// Workspace directory name used by `generate --debug`.
pub const DEBUG_WORKSPACE_NAME: &str = "keysmith-debug";

/// Prefix for timestamped workspace directory names.
pub const WORKSPACE_PREFIX: &str = "keysmith-";

/// Batch key-generation parameters.
pub const PARAMETERS_FILE: &str = "parameters";

/// Machine-readable status output of key generation.
pub const STATUS_FILE: &str = "status";

/// Subdirectory holding exported key material.
pub const EXPORTED_KEYS_DIR: &str = "keys";

pub const REVOCATION_CERT_FILE: &str = ".revocation-certificate.asc";
pub const PUBLIC_MASTER_KEY_FILE: &str = ".public-master.gpg";
pub const PRIVATE_MASTER_KEY_FILE: &str = ".private-master.gpg";
pub const SIGNING_SUBKEY_FILE: &str = ".signing-subkey.gpg";

/// Transient answer script fed to the revoke operation.
pub const REVOCATION_COMMAND_FILE: &str = ".rev-cert-input";

/// Answers for the revoke dialogue: confirm, reason 1 (no reason),
/// empty description, confirm again.
pub const REVOCATION_ANSWERS: &str = "y\n1\n\ny\n";

/// Symmetric and hash algorithm preferences written into the key.
pub const KEY_PREFERENCES: &str =
    "SHA512 SHA384 SHA256 SHA224 AES256 AES192 AES CAST5 ZLIB BZIP2 ZIP Uncompressed";

/// Algorithm for the signing subkey added after generation.
pub const SIGNING_SUBKEY_ALGO: &str = "rsa4096";

/// Placeholder substituted for secrets in displayed commands.
pub const REDACTED: &str = "XXXXX";

/// Length of a v4 key fingerprint in hex digits.
pub const FINGERPRINT_LEN: usize = 40;

/// Default validity of generated keys.
pub const DEFAULT_EXPIRY: &str = "1y";

/// Default RSA size for master key and subkeys.
pub const DEFAULT_KEY_LENGTH: u32 = 4096;
