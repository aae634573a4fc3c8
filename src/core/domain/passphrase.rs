//! Passphrase type.
//!
//! Holds the master key passphrase in memory that is wiped on drop.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::validation::validate_passphrase;
use crate::error::Result;

/// Passphrase protecting the master key.
///
/// Never written to disk and never displayed; `Debug` prints a mask.
#[derive(Clone)]
pub struct Passphrase(Zeroizing<String>);

impl Passphrase {
    /// Wrap a passphrase after validating it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPassphrase` if it is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = Zeroizing::new(value.into());
        validate_passphrase(&value)?;
        Ok(Self(value))
    }

    /// The secret value, for handing to the key-management program.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Passphrase {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for Passphrase {}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(***)")
    }
}
