//! Wallet address validation.
//!
//! Addresses are 42-character hexadecimal strings prefixed with `0x` (20-byte
//! identifiers). This is the only input validation in the crate with real
//! failure semantics: transfer destinations must pass it before any state is
//! touched, and failures carry a descriptive reason suitable for an inline
//! field-level message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Total length of a well-formed address: `0x` plus 40 hex digits.
pub const ADDRESS_LEN: usize = 42;

/// Number of hex digits following the `0x` prefix.
const HEX_DIGITS: usize = 40;

/// The reason an address failed validation.
///
/// Checks are applied in order: prefix, length, charset. The first failing
/// check wins, so input without a `0x` prefix reports [`BadPrefix`] even when
/// it is also the wrong length.
///
/// [`BadPrefix`]: AddressError::BadPrefix
///
/// # Examples
///
/// ```
/// use chainview::domain::{validate_address, AddressError};
///
/// assert!(validate_address("0x1234567890abcdef1234567890abcdef12345678").is_ok());
/// assert_eq!(validate_address("0x123"), Err(AddressError::WrongLength(5)));
/// assert_eq!(validate_address("not-an-address"), Err(AddressError::BadPrefix));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AddressError {
    /// The input does not start with `0x`.
    #[error("address must start with 0x")]
    BadPrefix,

    /// The input has the right prefix but the wrong total length.
    ///
    /// Carries the actual length of the input for the error message.
    #[error("address must be {ADDRESS_LEN} characters (0x + {HEX_DIGITS} hex digits), got {0}")]
    WrongLength(usize),

    /// The input contains characters outside `[0-9a-fA-F]` after the prefix.
    #[error("address contains non-hexadecimal characters")]
    BadCharset,
}

/// Validates the shape of a wallet address.
///
/// A valid address matches `^0x[a-fA-F0-9]{40}$`. Returns `Ok(())` for valid
/// input and the first failing [`AddressError`] otherwise. Purely syntactic:
/// no checksum or on-chain existence check is performed.
///
/// # Errors
///
/// Returns an [`AddressError`] describing the first failed check.
pub fn validate_address(input: &str) -> Result<(), AddressError> {
    let body = input.strip_prefix("0x").ok_or(AddressError::BadPrefix)?;

    if body.len() != HEX_DIGITS {
        return Err(AddressError::WrongLength(input.len()));
    }

    if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::BadCharset);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(validate_address("0x1234567890abcdef1234567890abcdef12345678").is_ok());
        // Mixed case is fine, the regex allows both.
        assert!(validate_address("0x1234567890ABCDEF1234567890abcdef12345678").is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(validate_address("0x123"), Err(AddressError::WrongLength(5)));
        let too_long = format!("0x{}", "a".repeat(41));
        assert_eq!(validate_address(&too_long), Err(AddressError::WrongLength(43)));
    }

    #[test]
    fn rejects_bad_prefix() {
        assert_eq!(validate_address("not-an-address"), Err(AddressError::BadPrefix));
        assert_eq!(validate_address(""), Err(AddressError::BadPrefix));
        // Uppercase prefix is not accepted.
        let upper = format!("0X{}", "a".repeat(40));
        assert_eq!(validate_address(&upper), Err(AddressError::BadPrefix));
    }

    #[test]
    fn rejects_bad_charset() {
        let bad = format!("0x{}", "g".repeat(40));
        assert_eq!(validate_address(&bad), Err(AddressError::BadCharset));
    }

    #[test]
    fn prefix_check_runs_before_length_check() {
        assert_eq!(validate_address("abc"), Err(AddressError::BadPrefix));
    }
}
