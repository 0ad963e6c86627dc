//! Key generator configuration.

use crate::error::{KeygenError, Result};
use std::env::{self, VarError};

/// Environment variable holding the key length in bytes.
pub const KEY_LENGTH_VAR: &str = "KEY_LENGTH";

/// Key length used when [`KEY_LENGTH_VAR`] is not set.
pub const DEFAULT_KEY_LENGTH: i64 = 32;

/// Configuration for a single key generation run.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `KEY_LENGTH` | `32` | Number of random bytes in the key |
///
/// A set but unparsable value is an error, never a silent fallback to the
/// default.
///
/// # Example
///
/// ```rust
/// use secure_keygen::KeygenConfig;
///
/// let config = KeygenConfig::from_value(Some("64")).unwrap();
/// assert_eq!(config.key_length, 64);
///
/// let config = KeygenConfig::from_value(None).unwrap();
/// assert_eq!(config.key_length, 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeygenConfig {
    /// Number of random bytes to draw (default: 32)
    ///
    /// Kept signed so that a negative value survives parsing and is
    /// rejected by the generator.
    pub key_length: i64,
}

impl KeygenConfig {
    /// Load a `.env` file if one exists, then read the config from the
    /// environment.
    ///
    /// Variables already set in the process environment take precedence over
    /// the file.
    ///
    /// The file is applied all or nothing: if any line fails to parse, none
    /// of its variables are set.
    pub fn load() -> Result<Self> {
        load_dotenv();
        Self::from_env()
    }

    /// Create a new config from environment variables.
    pub fn from_env() -> Result<Self> {
        match env::var(KEY_LENGTH_VAR) {
            Ok(value) => Self::from_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_value(None),
            Err(VarError::NotUnicode(raw)) => Err(KeygenError::InvalidConfiguration {
                variable: KEY_LENGTH_VAR,
                value: raw.to_string_lossy().into_owned(),
                reason: "not valid unicode".to_string(),
            }),
        }
    }

    /// Resolve the config from an already looked-up `KEY_LENGTH` value.
    ///
    /// Surrounding whitespace is ignored.
    pub fn from_value(value: Option<&str>) -> Result<Self> {
        let Some(value) = value else {
            return Ok(Self::default());
        };

        let key_length = value
            .trim()
            .parse::<i64>()
            .map_err(|e| KeygenError::InvalidConfiguration {
                variable: KEY_LENGTH_VAR,
                value: value.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { key_length })
    }
}

fn load_dotenv() {
    let iter = match dotenvy::dotenv_iter() {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
            return;
        }
    };

    let vars = match iter.collect::<std::result::Result<Vec<_>, _>>() {
        Ok(vars) => vars,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
            return;
        }
    };

    tracing::debug!(count = vars.len(), "loaded .env file");
    for (key, value) in vars {
        if env::var_os(&key).is_none() {
            env::set_var(key, value);
        }
    }
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}
