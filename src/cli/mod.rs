//! Command-line interface.

pub mod completions;
pub mod generate;
pub mod list;
pub mod output;
pub mod prompt;
pub mod remove;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::cancel::CancelToken;
use crate::core::config::Config;

/// Keysmith - generate a GPG master keypair and keep only a signing subkey locally.
#[derive(Parser)]
#[command(
    name = "keysmith",
    about = "Generate a secure GPG keypair along with a separate signing subkey",
    version,
    after_help = "The master key goes offline. The subkey stays."
)]
pub struct Cli {
    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a GPG master keypair along with a separate signing subkey
    Generate {
        /// Keep the temporary directory after the run, under a fixed name
        #[arg(short, long)]
        debug: bool,
    },

    /// List existing GPG keys
    #[command(visible_alias = "ls")]
    List {
        /// Use the long key id format
        #[arg(long)]
        long: bool,
        /// List secret keys instead of public keys
        #[arg(long)]
        secret: bool,
    },

    /// Remove an existing GPG key by fingerprint
    #[command(visible_alias = "rm", alias = "delete")]
    Remove {
        /// Full 40-character key fingerprint
        fingerprint: String,
        /// Remove without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Log levels accepted by `--log-level`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl LogLevel {
    /// `EnvFilter` directive for this level. `fatal` and `panic` have no
    /// tracing equivalent and behave like `error`.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "keysmith=debug",
            LogLevel::Info => "keysmith=info",
            LogLevel::Warn => "keysmith=warn",
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => "keysmith=error",
        }
    }
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: &Config, cancel: CancelToken) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Generate { debug } => generate::execute(config, cancel, debug),
        List { long, secret } => list::execute(config, cancel, long, secret),
        Remove { fingerprint, force } => remove::execute(config, cancel, &fingerprint, force),
        Completions { shell } => completions::execute(shell),
    }
}
