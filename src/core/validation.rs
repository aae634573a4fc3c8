//! Input validation for keysmith operations.
//!
//! Validates the identity fields, passphrases and fingerprints supplied by
//! the user. All validators are pure: they never touch the terminal, the
//! filesystem or the keyring, so the prompt loop and direct callers share
//! them.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::constants::FINGERPRINT_LEN;
use crate::error::ValidationError;

/// Signature shared by all field validators.
pub type Validator = fn(&str) -> std::result::Result<(), ValidationError>;

fn expiry_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{1,4}[wmy]$").expect("valid expiry regex"))
}

fn email_pattern() -> &'static Regex {
    // dot-atom local part and dot-atom domain
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let atom = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";
        Regex::new(&format!(r"^{atom}(\.{atom})*@{atom}(\.{atom})*$")).expect("valid email regex")
    })
}

/// Validate a real name.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` if the name is empty.
pub fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName("can not be empty".to_string()));
    }
    Ok(())
}

/// Validate an email address of the form `local-part@domain`.
///
/// Display-name forms such as `Alice <alice@example.com>` are rejected;
/// the value is written verbatim into the key's user id.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` if the address is empty or malformed.
pub fn validate_email(email: &str) -> std::result::Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::InvalidEmail("can not be empty".to_string()));
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail(
            "missing '@' or angle-addr".to_string(),
        ));
    }
    if !email_pattern().is_match(email) {
        return Err(ValidationError::InvalidEmail(format!(
            "'{}' is not a valid address",
            email
        )));
    }
    Ok(())
}

/// Validate a key expiry.
///
/// Accepts `0` (never expires) or 1-4 digits followed by `w`, `m` or `y`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidExpiry` for anything else.
pub fn validate_expiry(expiry: &str) -> std::result::Result<(), ValidationError> {
    if expiry == "0" || expiry_pattern().is_match(expiry) {
        return Ok(());
    }
    Err(ValidationError::InvalidExpiry)
}

/// Validate a passphrase.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPassphrase` if the passphrase is empty
/// or contains whitespace.
pub fn validate_passphrase(passphrase: &str) -> std::result::Result<(), ValidationError> {
    if passphrase.is_empty() {
        return Err(ValidationError::InvalidPassphrase(
            "can not be empty".to_string(),
        ));
    }
    if passphrase.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidPassphrase(
            "can not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate a full key fingerprint (40 hex digits, no spaces).
///
/// # Errors
///
/// Returns `ValidationError::InvalidFingerprint` on wrong length or
/// non-hex characters.
pub fn validate_fingerprint(fingerprint: &str) -> std::result::Result<(), ValidationError> {
    if fingerprint.len() != FINGERPRINT_LEN {
        return Err(ValidationError::InvalidFingerprint {
            value: fingerprint.to_string(),
            reason: format!("must have length of {}", FINGERPRINT_LEN),
        });
    }
    if let Some(ch) = fingerprint.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidFingerprint {
            value: fingerprint.to_string(),
            reason: format!("invalid character '{}'", ch),
        });
    }
    Ok(())
}
