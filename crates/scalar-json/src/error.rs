//! Error types and result statuses for scalar JSON parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing a scalar JSON value.
///
/// Every variant carries the byte offset where the offending token (or the
/// unexpected trailing content) starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("expected a value at offset {offset}")]
    ExpectValue { offset: usize },

    /// A malformed literal or malformed number.
    #[error("invalid value at offset {offset}")]
    InvalidValue { offset: usize },

    /// Non-whitespace content followed a complete value, or, under the default
    /// [`LeadingZero`](crate::LeadingZero) policy, a number starting with `0`
    /// was followed by something other than end of input or `.`.
    #[error("root not singular: unexpected content at offset {offset}")]
    RootNotSingular { offset: usize },

    /// The number's magnitude does not fit in an `f64`.
    #[error("number too big at offset {offset}")]
    NumberTooBig { offset: usize },
}

impl ParseError {
    /// The flat status matching this error.
    pub fn status(&self) -> ParseStatus {
        match self {
            ParseError::ExpectValue { .. } => ParseStatus::ExpectValue,
            ParseError::InvalidValue { .. } => ParseStatus::InvalidValue,
            ParseError::RootNotSingular { .. } => ParseStatus::RootNotSingular,
            ParseError::NumberTooBig { .. } => ParseStatus::NumberTooBig,
        }
    }

    /// Byte offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::ExpectValue { offset }
            | ParseError::InvalidValue { offset }
            | ParseError::RootNotSingular { offset }
            | ParseError::NumberTooBig { offset } => offset,
        }
    }
}

/// Outcome of a parse, as reported by [`parse_status`](crate::parse_status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    Ok,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl ParseStatus {
    /// Whether this is [`ParseStatus::Ok`].
    pub fn is_ok(self) -> bool {
        self == ParseStatus::Ok
    }

    /// Collapse a parse result into its status.
    pub fn from_result<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ParseStatus::Ok,
            Err(e) => e.status(),
        }
    }
}

/// Convenience alias used throughout scalar-json.
pub type Result<T> = std::result::Result<T, ParseError>;
