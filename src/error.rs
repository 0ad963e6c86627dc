//! Error types shared by the generator, the config layer and the entry point.

use thiserror::Error;

/// Everything that can stop a token from being produced.
#[derive(Error, Debug)]
pub enum KeygenError {
    /// An environment variable is present but cannot be used.
    #[error("invalid configuration: {variable}={value:?}: {reason}")]
    InvalidConfiguration {
        variable: &'static str,
        value: String,
        reason: String,
    },

    /// The generator was called with a length it cannot honour.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operating system random source failed.
    #[error("entropy source failure")]
    EntropySourceFailure(#[source] rand::Error),

    /// Writing the token out failed.
    #[error("failed to write token")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeygenError>;
