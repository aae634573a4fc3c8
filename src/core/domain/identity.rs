//! User identity type.
//!
//! The name, email and expiry a key is generated for. Built once per run
//! after the user confirms the values, then only read.

use std::fmt;

use crate::core::validation::{validate_email, validate_expiry, validate_name};
use crate::error::Result;

/// Identity the master key is issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    full_name: String,
    email: String,
    expiry: String,
}

impl UserIdentity {
    /// Create an identity from already-entered values.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if any field is invalid.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Result<Self> {
        let full_name = full_name.into();
        let email = email.into();
        let expiry = expiry.into();

        validate_name(&full_name)?;
        validate_email(&email)?;
        validate_expiry(&expiry)?;

        Ok(Self {
            full_name,
            email,
            expiry,
        })
    }

    /// Real name written into the user id.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Email written into the user id.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Validity period (`0` or `<n>w|m|y`).
    pub fn expiry(&self) -> &str {
        &self.expiry
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name:   {}\nEmail:  {}\nExpiry: {}",
            self.full_name, self.email, self.expiry
        )
    }
}
