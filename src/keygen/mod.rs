//! Secure key generation.

mod entropy;
mod token;

pub use entropy::fill_secure_random;
pub use token::{generate_secure_key, Token};
