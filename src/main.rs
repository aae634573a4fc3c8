//! Keysmith - generate a GPG master keypair and keep only a signing subkey locally.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keysmith::cli::output;
use keysmith::cli::{execute, Cli};
use keysmith::core::cancel::CancelToken;
use keysmith::core::config::Config;
use keysmith::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // KEYSMITH_LOG wins over the flags
    let filter = EnvFilter::try_from_env("KEYSMITH_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keysmith=debug")
        } else {
            EnvFilter::new(cli.log_level.directive())
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            output::error(&e.to_string());
            if matches!(e, Error::Config(ConfigError::Parse { .. })) {
                output::hint("check the config file, or set KEYSMITH_CONFIG to another one");
            }
            std::process::exit(1);
        }
    };
    output::set_colors(config.color);

    let cancel = match CancelToken::install() {
        Ok(cancel) => cancel,
        Err(e) => {
            output::error(&format!("could not install interrupt handler: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = execute(cli.command, &config, cancel) {
        if e.is_cancelled() {
            output::blank();
            output::error("Interrupted: cancelled by user");
        } else {
            let suggestion = match &e {
                Error::ToolUnavailable { .. } => {
                    Some("install GnuPG 2.1 or later, or set KEYSMITH_GPG")
                }
                Error::SubkeyImport { .. } => {
                    Some("import the signing subkey backup manually with: gpg --import <file>")
                }
                _ => None,
            };
            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
        }
        std::process::exit(e.exit_code());
    }
}
