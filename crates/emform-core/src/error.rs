//! # Error Types
//!
//! Errors raised while constructing core domain values. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Top-level error type for core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmformError {
    /// A string is not one of the enumerated department names.
    #[error("unknown department: {0:?}")]
    UnknownDepartment(String),

    /// A string is not shaped like an email address.
    #[error("invalid email address {value:?}: {reason}")]
    InvalidEmail {
        /// The rejected input.
        value: String,
        /// Which part of the shape check failed.
        reason: &'static str,
    },
}
