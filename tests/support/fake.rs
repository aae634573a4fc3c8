//! Fake gpg and scripted terminal for workflow tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use keysmith::core::cancel::CancelToken;
use keysmith::core::gpg::{Capture, GpgCommand, RunOutput, Runner};
use keysmith::core::ui::{TextPrompt, Ui};
use keysmith::core::validation::Validator;
use keysmith::error::{Error, Result};

use super::fixtures::{FINGERPRINT_LISTING, MASTER};

type Hook = Box<dyn Fn(&GpgCommand)>;

/// Behaves like a cooperative gpg: writes the status file on key
/// generation, writes `--output` files and answers `--fingerprint`.
pub struct FakeGpg {
    pub installed: bool,
    failing: Vec<String>,
    hooks: Vec<(String, Hook)>,
    commands: RefCell<Vec<GpgCommand>>,
}

impl FakeGpg {
    pub fn new() -> Self {
        Self {
            installed: true,
            failing: Vec::new(),
            hooks: Vec::new(),
            commands: RefCell::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        Self {
            installed: false,
            ..Self::new()
        }
    }

    /// Make every run of `operation` exit with status 2.
    pub fn failing(mut self, operation: &str) -> Self {
        self.failing.push(operation.to_string());
        self
    }

    /// Call `hook` whenever `operation` runs, before it answers.
    pub fn on(mut self, operation: &str, hook: impl Fn(&GpgCommand) + 'static) -> Self {
        self.hooks.push((operation.to_string(), Box::new(hook)));
        self
    }

    pub fn commands(&self) -> Vec<GpgCommand> {
        self.commands.borrow().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(|c| c.operation().to_string())
            .collect()
    }

    pub fn command(&self, operation: &str) -> Option<GpgCommand> {
        self.commands
            .borrow()
            .iter()
            .find(|c| c.operation() == operation)
            .cloned()
    }
}

impl Runner for FakeGpg {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.installed
            .then(|| PathBuf::from("/usr/bin").join(program))
    }

    fn run(&self, command: &GpgCommand, _capture: Capture) -> std::io::Result<RunOutput> {
        self.commands.borrow_mut().push(command.clone());
        let operation = command.operation();

        for (op, hook) in &self.hooks {
            if op == operation {
                hook(command);
            }
        }

        if self.failing.iter().any(|op| op == operation) {
            return Ok(RunOutput::failed(
                2,
                format!("gpg: {} failed: Operation cancelled", operation),
            ));
        }

        if operation == "--generate-key" {
            if let Some(status) = command.option_value("--status-file") {
                fs::write(
                    status,
                    format!(
                        "[GNUPG:] KEY_CONSIDERED {} 0\n[GNUPG:] KEY_CREATED B {}\n",
                        MASTER, MASTER
                    ),
                )?;
            }
        }
        if let Some(output) = command.option_value("--output") {
            fs::write(output, "-----BEGIN PGP BLOCK-----\n-----END PGP BLOCK-----\n")?;
        }
        if operation == "--fingerprint" {
            return Ok(RunOutput::ok(FINGERPRINT_LISTING));
        }
        Ok(RunOutput::ok(""))
    }
}

/// One scripted response from the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
    Secret(String),
    /// Ctrl-C at this prompt.
    Interrupt,
}

/// Terminal that plays back a fixed list of answers and records
/// everything shown to the user.
pub struct ScriptedUi {
    answers: RefCell<VecDeque<Answer>>,
    prompts: RefCell<Vec<String>>,
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    cancel: Option<CancelToken>,
}

impl ScriptedUi {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            prompts: RefCell::new(Vec::new()),
            messages: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
            cancel: None,
        }
    }

    /// Also set `cancel` when an interrupt is played back, like SIGINT would.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Every prompt asked, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn asked(&self, prompt: &str) -> bool {
        self.prompts.borrow().iter().any(|p| p.contains(prompt))
    }

    /// Info and warning text shown.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.prompts.borrow_mut().push(prompt.to_string());
        let answer = self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {}", prompt));
        if answer == Answer::Interrupt {
            if let Some(cancel) = &self.cancel {
                cancel.cancel();
            }
        }
        answer
    }
}

impl Ui for ScriptedUi {
    fn text(&self, prompt: &TextPrompt) -> Result<String> {
        loop {
            match self.next(&prompt.prompt) {
                Answer::Text(raw) => match prompt.accept(&raw) {
                    Ok(value) => return Ok(value),
                    Err(e) => self.errors.borrow_mut().push(e.to_string()),
                },
                Answer::Interrupt => return Err(Error::Cancelled),
                other => panic!("expected text answer for '{}', got {:?}", prompt.prompt, other),
            }
        }
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        match self.next(prompt) {
            Answer::Confirm(yes) => Ok(yes),
            Answer::Interrupt => Err(Error::Cancelled),
            other => panic!("expected confirmation for '{}', got {:?}", prompt, other),
        }
    }

    fn secret(&self, prompt: &str, validator: Validator) -> Result<String> {
        loop {
            match self.next(prompt) {
                Answer::Secret(value) => match validator(&value) {
                    Ok(()) => return Ok(value),
                    Err(e) => self.errors.borrow_mut().push(e.to_string()),
                },
                Answer::Interrupt => return Err(Error::Cancelled),
                other => panic!("expected secret for '{}', got {:?}", prompt, other),
            }
        }
    }

    fn info(&self, msg: &str) {
        self.messages.borrow_mut().push(msg.to_string());
    }

    fn warn(&self, msg: &str) {
        self.messages.borrow_mut().push(msg.to_string());
    }

    fn error(&self, msg: &str) {
        self.errors.borrow_mut().push(msg.to_string());
    }

    fn show(&self, block: &str) {
        self.messages.borrow_mut().push(block.to_string());
    }

    fn step(&self, _label: &str) {}

    fn step_done(&self, _success: bool) {}
}
