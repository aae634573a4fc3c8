//! Completions command.
//!
//! Completion scripts cover every subcommand and its flags.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as Target;

use crate::cli::{Cli, Shell};
use crate::error::Result;

const BIN_NAME: &str = "keysmith";

impl From<Shell> for Target {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Target::Bash,
            Shell::Zsh => Target::Zsh,
            Shell::Fish => Target::Fish,
            Shell::PowerShell => Target::PowerShell,
        }
    }
}

/// Print the completion script for `shell`.
pub fn execute(shell: Shell) -> Result<()> {
    let stdout = std::io::stdout();
    write_script(shell, &mut stdout.lock())
}

/// Write the completion script for `shell` to `out`.
pub fn write_script(shell: Shell, out: &mut dyn Write) -> Result<()> {
    clap_complete::generate(Target::from(shell), &mut Cli::command(), BIN_NAME, out);
    out.flush()?;
    Ok(())
}
