//! Key fingerprint and key id display format.

use std::fmt;
use std::str::FromStr;

use crate::core::validation::validate_fingerprint;
use crate::error::{Error, Result};

/// A full 40-hex-digit key fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parse and validate a fingerprint.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFingerprint` on wrong length or
    /// non-hex characters.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_fingerprint(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Fingerprint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Key id format used when listing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyIdFormat {
    #[default]
    Short,
    Long,
}

impl KeyIdFormat {
    /// Pick the format from a `--long` style flag.
    pub fn from_long(long: bool) -> Self {
        if long {
            Self::Long
        } else {
            Self::Short
        }
    }

    /// Value passed to `--keyid-format`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}
