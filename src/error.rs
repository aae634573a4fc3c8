//! Error types for keysmith.
//!
//! Every fallible operation returns [`Result`]. Errors are grouped by the
//! concern that raised them and composed into the top-level [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A user-supplied value was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The user interrupted the run (Ctrl-C or Esc).
    #[error("cancelled by user")]
    Cancelled,

    /// The key-management program is not on the search path.
    #[error("{program} could not be found; install GnuPG from https://gnupg.org/download/")]
    ToolUnavailable { program: String },

    /// Temporary workspace failure.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// Tool output could not be understood.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The key-management program exited unsuccessfully.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// At least one of the three key exports failed.
    #[error(
        "could not export all keys ({}). This must be done manually from {}",
        .failed.join(", "),
        .dir.display()
    )]
    ExportIncomplete {
        failed: Vec<&'static str>,
        dir: PathBuf,
    },

    /// The master secret key is gone but the signing subkey did not come back.
    #[error(
        "master secret key was deleted but importing the signing subkey from {} failed: {source}. \
         This keyring has no usable secret key; re-import the subkey from your backup",
        .path.display()
    )]
    SubkeyImport {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the run ended because the user asked it to.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Process exit code for this error.
    ///
    /// Cancellation mirrors the conventional SIGINT exit status.
    pub fn exit_code(&self) -> i32 {
        if self.is_cancelled() {
            130
        } else {
            1
        }
    }
}

/// Invalid user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("invalid expiry: ensure expiry is of format '<n>w|m|y' or '0'")]
    InvalidExpiry,

    #[error("invalid passphrase: {0}")]
    InvalidPassphrase(String),

    #[error("invalid fingerprint '{value}': {reason}")]
    InvalidFingerprint { value: String, reason: String },
}

/// Temporary workspace errors.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("could not create temporary directory {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Malformed output from the key-management program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("generated key id not present in status file")]
    MissingKeyId,

    #[error("invalid key id format in status file: {0}")]
    InvalidKeyId(String),

    #[error("failed to parse fingerprint from gpg output")]
    Fingerprint,
}

/// Non-zero exit from the key-management program.
///
/// Both the command and the diagnostic text are already redacted.
#[derive(Error, Debug, Clone)]
#[error("'{command}' failed ({}): {}", status_text(.code), .diagnostic.trim())]
pub struct ToolError {
    pub command: String,
    pub code: Option<i32>,
    pub diagnostic: String,
}

fn status_text(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "terminated by signal".to_string(),
    }
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
