//! User interrupt tracking.
//!
//! SIGINT is turned into a flag instead of terminating the process, so a
//! Ctrl-C in the middle of a run still reaches workspace cleanup. The flag
//! is polled at prompt and step boundaries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};

/// Shared interrupt flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that is only cancelled explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is set when the process receives SIGINT.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the signal handler can't be registered.
    pub fn install() -> Result<Self> {
        let token = Self::new();
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&token.flag))?;
        debug!("interrupt handler installed");
        Ok(token)
    }

    /// Mark the run as cancelled.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Fail with `Error::Cancelled` once an interrupt was seen.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}
