//! # Error Types
//!
//! Errors raised while constructing shared types from untrusted input.

use thiserror::Error;

/// Errors that can occur when parsing a `TopicType` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicParseError {
    /// The text is not valid hexadecimal.
    #[error("Invalid topic hex '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// The decoded topic does not have exactly four bytes.
    #[error("Invalid topic length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
