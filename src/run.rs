//! One generation run: draw a key and write it out.

use crate::config::KeygenConfig;
use crate::error::Result;
use crate::keygen::{generate_secure_key, Token};
use std::io::Write;

/// Generate a key as configured and write it to `out` as a single line.
///
/// Only the token and a trailing newline are written, so the output can be
/// captured directly by a calling script. Progress goes to the log.
pub fn run<W: Write>(config: &KeygenConfig, out: &mut W) -> Result<Token> {
    tracing::info!(
        key_length = config.key_length,
        "starting secure key generation for {} byte length",
        config.key_length
    );

    let token = generate_secure_key(config.key_length)?;

    writeln!(out, "{token}")?;
    out.flush()?;

    tracing::info!("key generation completed");
    Ok(token)
}
