//! Parser configuration.
//!
//! The defaults reproduce the historical behavior of the parser exactly.
//! Embedding applications can deserialize a [`ParseOptions`] from their own
//! configuration files via `serde`.
//!
//! ```
//! use scalar_json::{parse_with, LeadingZero, ParseError, ParseOptions, Value};
//!
//! let strict = ParseOptions::default().with_leading_zero(LeadingZero::Strict);
//! assert_eq!(parse_with("0e1", &strict), Ok(Value::Number(0.0)));
//! assert_eq!(
//!     parse_with("012", &strict),
//!     Err(ParseError::InvalidValue { offset: 0 })
//! );
//! ```

use serde::{Deserialize, Serialize};

/// How a number starting with `0` is checked and reported.
///
/// Under [`RootNotSingular`](LeadingZero::RootNotSingular) and
/// [`InvalidValue`](LeadingZero::InvalidValue), a number whose first byte is
/// `0` must be followed by end of input or `.`. Anything else (`01`, `0 `,
/// `0e1`, `0x`) is rejected, and the variant picks the status. The check
/// does not apply after a minus sign, so `-01` parses as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadingZero {
    /// Reject as `RootNotSingular`, as earlier releases did.
    #[default]
    RootNotSingular,
    /// Same check, reported as `InvalidValue`.
    InvalidValue,
    /// JSON (RFC 8259) rule: only a `0` followed by another digit is rejected,
    /// with or without a minus sign, as `InvalidValue`. `0 `, `0e1` and `0x`
    /// then parse as `0`, with any leftover text reported as trailing content.
    Strict,
}

/// Options accepted by the `*_with` parse entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub leading_zero: LeadingZero,
}

impl ParseOptions {
    /// Select the leading-zero policy.
    pub fn with_leading_zero(mut self, policy: LeadingZero) -> Self {
        self.leading_zero = policy;
        self
    }
}
