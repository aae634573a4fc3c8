//! Keysmith - guided GPG keypair generation with an offline master key.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Full master key + signing subkey journey
//! │   ├── list          # List public or secret keys
//! │   ├── remove        # Delete a key by fingerprint
//! │   ├── prompt        # dialoguer-backed Ui implementation
//! │   └── output        # Terminal styling helpers
//! └── core/             # Core library components
//!     ├── validation    # Name, email, expiry, passphrase rules
//!     ├── gpg/          # gpg command builder, runner, client
//!     ├── workspace/    # Per-run temporary directory
//!     ├── keygen        # Generate workflow state machine
//!     ├── keys          # List and remove journeys
//!     ├── ui            # Prompt and notice seam
//!     └── config        # Optional config.toml
//! ```
//!
//! All cryptography is delegated to an installed `gpg`.

pub mod cli;
pub mod core;
pub mod error;
