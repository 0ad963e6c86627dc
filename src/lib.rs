//! Secure Keygen - cryptographically secure URL-safe tokens.
//!
//! This crate draws random bytes from the operating system and encodes them
//! with the URL-safe base64 alphabet (no padding):
//!
//! - **keygen**: Token generation on top of the OS random source
//! - **config**: `KEY_LENGTH` resolution with a default of 32 bytes
//! - **bootstrap**: Scoped tracing setup writing to stderr
//! - **run**: The generate-and-print flow used by the `keygen` binary
//!
//! # Features
//!
//! - `config` - `.env` aware configuration (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust
//! use secure_keygen::{run, KeygenConfig};
//!
//! let config = KeygenConfig::from_value(Some("16")).unwrap();
//! let mut out = Vec::new();
//! let token = run(&config, &mut out).unwrap();
//!
//! assert_eq!(token.decode().unwrap().len(), 16);
//! assert_eq!(out, format!("{token}\n").into_bytes());
//! ```

pub mod error;
pub mod keygen;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

#[cfg(feature = "config")]
mod run;

// Re-exports for convenience
pub use error::KeygenError;
pub use keygen::{fill_secure_random, generate_secure_key, Token};

#[cfg(feature = "config")]
pub use config::{KeygenConfig, DEFAULT_KEY_LENGTH, KEY_LENGTH_VAR};

#[cfg(feature = "config")]
pub use run::run;

#[cfg(feature = "bootstrap")]
pub use bootstrap::scoped_tracing;
