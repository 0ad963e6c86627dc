//! Configuration management with environment variable support.

mod base;

pub use base::{KeygenConfig, DEFAULT_KEY_LENGTH, KEY_LENGTH_VAR};
