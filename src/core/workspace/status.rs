//! Status file written by key generation.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::constants::FINGERPRINT_LEN;
use crate::core::domain::Fingerprint;
use crate::error::{ParseError, Result};

fn key_created() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"KEY_CREATED \w (\w*)").expect("valid status regex"))
}

/// Extract the generated key id from status output.
///
/// Verbose status output may report several keys; the last `KEY_CREATED`
/// line wins.
///
/// # Errors
///
/// Returns `ParseError::MissingKeyId` without a match and
/// `ParseError::InvalidKeyId` when the id is not a 40-digit fingerprint.
pub fn parse_created_key_id(contents: &str) -> Result<Fingerprint> {
    let id = contents
        .lines()
        .filter_map(|line| key_created().captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .last()
        .filter(|id| !id.is_empty())
        .ok_or(ParseError::MissingKeyId)?;

    if id.len() != FINGERPRINT_LEN {
        return Err(ParseError::InvalidKeyId(id.to_string()).into());
    }
    Fingerprint::new(id).map_err(|_| ParseError::InvalidKeyId(id.to_string()).into())
}
