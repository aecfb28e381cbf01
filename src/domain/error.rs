//! Error types for chainview operations.
//!
//! This module defines the centralized error type [`ChainviewError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! # Error Taxonomy
//!
//! The taxonomy is deliberately narrow:
//!
//! - **Validation errors** ([`ChainviewError::Validation`],
//!   [`ChainviewError::Address`]): recovered locally and surfaced as inline
//!   field-level messages. Never retried.
//! - **Operation failures** ([`ChainviewError::Transfer`],
//!   [`ChainviewError::Transport`]): surfaced as user-visible status messages.
//!   Transport failures are transient and may be retried; transfer rejections
//!   are terminal.
//! - **Infrastructure errors** ([`ChainviewError::Snapshot`],
//!   [`ChainviewError::Io`], [`ChainviewError::Config`]): bad snapshot data,
//!   filesystem failures, malformed configuration.
//!
//! No error in this crate is fatal to the process; every failure path leaves
//! the registry in a consistent, re-enterable state.

use crate::domain::address::AddressError;
use thiserror::Error;

/// The main error type for chainview operations.
///
/// This enum consolidates all error conditions that can occur while loading
/// snapshots, validating input, or applying registry operations. Variants that
/// wrap underlying errors use `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use chainview::domain::ChainviewError;
///
/// let err = ChainviewError::Validation("item name is required".to_string());
/// assert!(!err.is_retryable());
///
/// let err = ChainviewError::Transport("connection reset".to_string());
/// assert!(err.is_retryable());
/// ```
#[derive(Debug, Error)]
pub enum ChainviewError {
    /// A required field is missing or malformed.
    ///
    /// Recovered locally and surfaced as an inline field-level message.
    /// The string describes the specific field problem.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A wallet address failed shape validation.
    ///
    /// Carries the specific [`AddressError`] reason (bad prefix, wrong length,
    /// bad charset) so callers can render a descriptive inline message.
    #[error("Invalid address: {0}")]
    Address(#[from] AddressError),

    /// A transfer was rejected by the registry.
    ///
    /// Occurs when the target item does not exist or is not in a transferable
    /// state. The string contains a description of the rejection.
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// The transport layer failed to submit a request.
    ///
    /// Classified as transient: a production caller may retry with backoff.
    /// The string contains details of the underlying failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Snapshot data could not be parsed or is internally inconsistent.
    ///
    /// The string contains a description of what went wrong.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChainviewError {
    /// Returns `true` when the failure is transient and worth retrying.
    ///
    /// Transport and I/O failures are classified as retryable; validation
    /// errors and registry rejections are terminal and retrying them would
    /// produce the same result.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Io(_))
    }
}

/// A specialized `Result` type for chainview operations.
///
/// This is a type alias for `std::result::Result<T, ChainviewError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ChainviewError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::AddressError;

    #[test]
    fn transport_and_io_failures_are_retryable() {
        assert!(ChainviewError::Transport("timeout".into()).is_retryable());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(ChainviewError::from(io).is_retryable());
    }

    #[test]
    fn validation_failures_are_terminal() {
        assert!(!ChainviewError::Validation("empty name".into()).is_retryable());
        assert!(!ChainviewError::Address(AddressError::BadPrefix).is_retryable());
        assert!(!ChainviewError::Transfer("unknown item".into()).is_retryable());
    }
}
