//! Configuration file management.
//!
//! Keysmith runs fine without a config file. When one exists it is read
//! from `$KEYSMITH_CONFIG` or `<config dir>/keysmith/config.toml`:
//!
//! ```toml
//! gpg_program = "gpg2"
//! gnupg_home = "/home/ada/.gnupg-offline"
//! temp_root = "/dev/shm"
//! subkey_length = 4096
//! default_expiry = "2y"
//! color = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::validation::validate_expiry;
use crate::error::{ConfigError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "KEYSMITH_CONFIG";

/// Environment variable overriding the gpg program.
pub const GPG_ENV: &str = "KEYSMITH_GPG";

/// Runtime configuration, built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Key-management program, resolved through PATH.
    pub gpg_program: String,
    /// Alternative keyring directory (`--homedir`).
    pub gnupg_home: Option<PathBuf>,
    /// Parent directory for per-run workspaces.
    pub temp_root: Option<PathBuf>,
    /// RSA size of the master key.
    pub key_length: u32,
    /// RSA size of the subkey created with the master key.
    pub subkey_length: u32,
    /// Expiry offered as the prompt default.
    pub default_expiry: String,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gpg_program: constants::GPG_PROGRAM.to_string(),
            gnupg_home: None,
            temp_root: None,
            key_length: constants::DEFAULT_KEY_LENGTH,
            subkey_length: constants::DEFAULT_KEY_LENGTH,
            default_expiry: constants::DEFAULT_EXPIRY.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("keysmith").join("config.toml"))
    }

    /// Load configuration from the environment and the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicitly named file can't be read,
    /// or if any file found is malformed or holds invalid values.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        if let Ok(program) = std::env::var(GPG_ENV) {
            if !program.is_empty() {
                config.gpg_program = program;
            }
        }
        if std::env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// Check values that would otherwise fail deep inside gpg.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.gpg_program.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "gpg_program",
                reason: "can not be empty".to_string(),
            }
            .into());
        }
        for (field, bits) in [
            ("key_length", self.key_length),
            ("subkey_length", self.subkey_length),
        ] {
            if !(1024..=4096).contains(&bits) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} is outside 1024..=4096", bits),
                }
                .into());
            }
        }
        if validate_expiry(&self.default_expiry).is_err() {
            return Err(ConfigError::Invalid {
                field: "default_expiry",
                reason: format!("'{}' is not '0' or '<n>w|m|y'", self.default_expiry),
            }
            .into());
        }
        Ok(())
    }

    /// Directory under which per-run workspaces are created.
    pub fn temp_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(std::env::temp_dir)
    }
}
