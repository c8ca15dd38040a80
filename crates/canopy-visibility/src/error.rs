//! Error types for visibility resolution
//!
//! Resolution itself is total over well-typed inputs; the fallible edge is
//! parsing roles, permission levels, and scopes out of storage or request
//! strings. An unrecognized value is a caller bug and must fail loudly —
//! silently degrading to "visible" or "hidden" would be a security defect.

use thiserror::Error;

/// Parse failures for visibility domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown organization role string.
    #[error("unknown organization role: {0}")]
    UnknownRole(String),

    /// Unknown permission level ordinal.
    #[error("unknown permission level: {0}")]
    UnknownPermissionLevel(i64),
}

/// Result type for visibility parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
