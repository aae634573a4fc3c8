//! Terminal implementation of the `Ui` seam.
//!
//! Prompts are `dialoguer` widgets. Ctrl-C inside a raw-mode widget (text
//! input, confirmation) comes back as an `Interrupted` I/O error, Esc on a
//! confirmation comes back as no answer; both become `Error::Cancelled`.
//! Hidden entry reads a whole line, so a SIGINT there only sets the cancel
//! token and takes effect on Enter: the validators let any input through
//! once the token is set so the widget returns and the token is checked.

use std::io::ErrorKind;

use dialoguer::{Confirm, Input, Password};

use crate::cli::output;
use crate::core::cancel::CancelToken;
use crate::core::ui::{TextPrompt, Ui};
use crate::core::validation::Validator;
use crate::error::{Error, Result};

/// How to leave a prompt, as shown under it.
fn exit_help(hidden: bool) -> &'static str {
    if hidden {
        "Ctrl-C then Enter to exit"
    } else {
        "Ctrl-C to exit"
    }
}

/// dialoguer-backed prompts and styled notices.
pub struct ConsoleUi {
    cancel: CancelToken,
}

impl ConsoleUi {
    pub fn new(cancel: CancelToken) -> Self {
        Self { cancel }
    }

    fn finish<T>(&self, answer: std::result::Result<T, dialoguer::Error>) -> Result<T> {
        let value = answer.map_err(prompt_error)?;
        self.cancel.check()?;
        Ok(value)
    }
}

fn prompt_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == ErrorKind::Interrupted => Error::Cancelled,
        dialoguer::Error::IO(e) => Error::Io(e),
    }
}

impl Ui for ConsoleUi {
    fn text(&self, prompt: &TextPrompt) -> Result<String> {
        if let Some(help) = &prompt.help {
            output::dimmed(help);
        }
        output::dimmed(exit_help(false));

        let label = match &prompt.default {
            Some(default) => format!("{} [{}]", prompt.prompt, default),
            None => prompt.prompt.clone(),
        };

        let cancel = self.cancel.clone();
        let raw = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                if cancel.is_cancelled() {
                    return Ok(());
                }
                prompt.accept(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text();
        let raw = self.finish(raw)?;

        Ok(prompt.accept(&raw)?)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact_opt();
        self.finish(answer)?.ok_or(Error::Cancelled)
    }

    fn secret(&self, prompt: &str, validator: Validator) -> Result<String> {
        output::dimmed(exit_help(true));
        let cancel = self.cancel.clone();
        let answer = Password::new()
            .with_prompt(prompt)
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                if cancel.is_cancelled() {
                    return Ok(());
                }
                validator(input).map_err(|e| e.to_string())
            })
            .interact();
        self.finish(answer)
    }

    fn info(&self, msg: &str) {
        output::info(msg);
    }

    fn warn(&self, msg: &str) {
        output::warn(msg);
    }

    fn error(&self, msg: &str) {
        output::error(msg);
    }

    fn show(&self, block: &str) {
        output::block(block);
    }

    fn step(&self, label: &str) {
        output::progress(label);
    }

    fn step_done(&self, success: bool) {
        output::progress_done(success);
    }
}
