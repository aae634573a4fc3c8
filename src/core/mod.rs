//! Core library components.
//!
//! Key-management logic with no terminal dependencies: validation, the
//! gpg client, the temporary workspace and the generate workflow.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod domain;
pub mod gpg;
pub mod keygen;
pub mod keys;
pub mod ui;
pub mod validation;
pub mod workspace;
