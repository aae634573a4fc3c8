//! User interaction seam.
//!
//! The workflow talks to the user only through [`Ui`]: validated text
//! prompts, yes/no confirmations, hidden secret entry, notices and a step
//! indicator around long-running gpg calls. Any prompt can end with
//! `Error::Cancelled` instead of an answer.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::domain::Passphrase;
use crate::core::validation::{validate_passphrase, Validator};
use crate::error::{Result, ValidationError};

/// A single validated text prompt.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    pub prompt: String,
    pub help: Option<String>,
    /// Substituted when the user submits an empty answer.
    pub default: Option<String>,
    pub validator: Validator,
}

impl TextPrompt {
    pub fn new(prompt: impl Into<String>, validator: Validator) -> Self {
        Self {
            prompt: prompt.into(),
            help: None,
            default: None,
            validator,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Apply the default to a submitted answer, then validate it.
    ///
    /// Prompt implementations call this on every submission and re-ask
    /// with the error message until it succeeds.
    pub fn accept(&self, input: &str) -> std::result::Result<String, ValidationError> {
        let value = match (&self.default, input.is_empty()) {
            (Some(default), true) => default.clone(),
            _ => input.to_string(),
        };
        (self.validator)(&value)?;
        Ok(value)
    }
}

/// Everything the workflow needs from the terminal.
pub trait Ui {
    /// Ask for a line of text until it validates.
    fn text(&self, prompt: &TextPrompt) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Ask for a hidden value until `validator` accepts it.
    fn secret(&self, prompt: &str, validator: Validator) -> Result<String>;

    fn info(&self, msg: &str);

    fn warn(&self, msg: &str);

    fn error(&self, msg: &str);

    /// Show a block of text set apart from the surrounding output.
    fn show(&self, block: &str);

    /// A long-running step starts.
    fn step(&self, label: &str);

    /// The step started last finished.
    fn step_done(&self, success: bool);
}

/// Ask for the master key passphrase twice until both entries match.
///
/// # Errors
///
/// Returns `Error::Cancelled` if the user interrupts either prompt.
pub fn get_passphrase<U: Ui + ?Sized>(ui: &U) -> Result<Passphrase> {
    loop {
        let first = Zeroizing::new(ui.secret("Please enter a passphrase:", validate_passphrase)?);
        let second = Zeroizing::new(ui.secret(
            "Please re-enter the passphrase to confirm:",
            validate_passphrase,
        )?);

        if *first == *second {
            return Passphrase::new(first.as_str());
        }
        debug!("passphrase confirmation mismatch");
        ui.error("Passphrases do not match!");
    }
}
