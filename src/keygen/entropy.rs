//! Access to the operating system random source.

use crate::error::{KeygenError, Result};
use rand::{rngs::OsRng, RngCore};

/// Fill `buf` with bytes from the operating system CSPRNG.
///
/// A failing source is reported as [`KeygenError::EntropySourceFailure`];
/// the call is never retried.
pub fn fill_secure_random(buf: &mut [u8]) -> Result<()> {
    fill_from(&mut OsRng, buf)
}

fn fill_from<R: RngCore + ?Sized>(rng: &mut R, buf: &mut [u8]) -> Result<()> {
    tracing::debug!(bytes = buf.len(), "reading from OS random source");
    rng.try_fill_bytes(buf).map_err(KeygenError::EntropySourceFailure)
}
