//! URL-safe token generation.

use super::entropy::fill_secure_random;
use crate::error::{KeygenError, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, DecodeError, Engine as _};
use std::fmt;

/// A random token encoded with the URL-safe base64 alphabet, without padding.
///
/// `Debug` output never contains the token itself; use [`Token::as_str`] or
/// `Display` to get at the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode the token back into the raw random bytes.
    pub fn decode(&self) -> std::result::Result<Vec<u8>, DecodeError> {
        URL_SAFE_NO_PAD.decode(&self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(<{} chars redacted>)", self.0.len())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a token from `length` bytes of OS randomness.
///
/// The result only contains `A-Z`, `a-z`, `0-9`, `-` and `_`, and decodes to
/// exactly `length` bytes. There is no seeding interface.
///
/// # Errors
///
/// - [`KeygenError::InvalidArgument`] if `length` is negative or the buffer
///   cannot be allocated.
/// - [`KeygenError::EntropySourceFailure`] if the OS random source fails.
///
/// # Example
///
/// ```rust
/// use secure_keygen::generate_secure_key;
///
/// let token = generate_secure_key(32).unwrap();
/// assert_eq!(token.decode().unwrap().len(), 32);
/// assert!(token
///     .as_str()
///     .chars()
///     .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_secure_key(length: i64) -> Result<Token> {
    let len = usize::try_from(length).map_err(|_| {
        if length < 0 {
            KeygenError::InvalidArgument(format!("key length must not be negative, got {length}"))
        } else {
            KeygenError::InvalidArgument(format!("key length {length} does not fit in memory"))
        }
    })?;

    let mut bytes = Vec::new();
    bytes.try_reserve_exact(len).map_err(|e| {
        KeygenError::InvalidArgument(format!("cannot allocate {len} bytes for key: {e}"))
    })?;
    bytes.resize(len, 0);

    fill_secure_random(&mut bytes)?;

    Ok(Token(URL_SAFE_NO_PAD.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    #[test]
    fn test_default_length_decodes_to_32_bytes() {
        let token = generate_secure_key(32).unwrap();
        assert_eq!(token.decode().unwrap().len(), 32);
        // ceil(32 * 4 / 3) without padding
        assert_eq!(token.as_str().len(), 43);
    }

    #[test]
    fn test_custom_length_decodes_to_64_bytes() {
        let token = generate_secure_key(64).unwrap();
        assert_eq!(token.decode().unwrap().len(), 64);
    }

    #[test]
    fn test_lengths_not_divisible_by_three() {
        for len in [1, 2, 4, 5, 31, 33] {
            let token = generate_secure_key(len).unwrap();
            assert_eq!(token.decode().unwrap().len(), len as usize, "length {len}");
            assert!(!token.as_str().contains('='));
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let token = generate_secure_key(0).unwrap();
        assert_eq!(token.as_str(), "");
        assert!(token.decode().unwrap().is_empty());
    }

    #[test]
    fn test_url_safe_alphabet() {
        for _ in 0..50 {
            let token = generate_secure_key(48).unwrap();
            assert!(token.as_str().chars().all(is_url_safe), "{token}");
        }
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let token = generate_secure_key(16).unwrap();
            assert!(seen.insert(token.into_string()), "duplicate token generated");
        }
    }

    #[test]
    fn test_negative_length_rejected() {
        let err = generate_secure_key(-1).unwrap_err();
        assert!(matches!(err, KeygenError::InvalidArgument(_)));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = generate_secure_key(32).unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains(token.as_str()));
        assert_eq!(debug, "Token(<43 chars redacted>)");
    }

    #[test]
    fn test_display_matches_as_str() {
        let token = generate_secure_key(8).unwrap();
        assert_eq!(token.to_string(), token.as_str());
        assert_eq!(token.as_ref(), token.as_str());
    }
}
