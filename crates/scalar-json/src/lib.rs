//! # scalar-json
//!
//! A small recursive-descent parser for **scalar JSON values**: the literals
//! `true`, `false`, `null`, and decimal/exponential numbers.
//!
//! Whitespace around the value is allowed; anything else after it is an error.
//! Numbers are converted to `f64` with correct rounding, and magnitudes beyond
//! the `f64` range are reported rather than silently becoming infinity.
//!
//! ## Quick start
//!
//! ```rust
//! use scalar_json::{parse, parse_status, ParseStatus, TypeTag, Value};
//!
//! let value = parse("  3.25e2 ").unwrap();
//! assert_eq!(value.get_type(), TypeTag::Number);
//! assert_eq!(value.get_number(), 325.0);
//!
//! // Flat status, value reset to null on failure
//! assert_eq!(parse_status("1e400"), (Value::Null, ParseStatus::NumberTooBig));
//! assert_eq!(parse_status("nul"), (Value::Null, ParseStatus::InvalidValue));
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — cursor-based parser and public entry points
//! - [`types`] — `Value` and `TypeTag`
//! - [`options`] — `ParseOptions` and the leading-zero policy
//! - [`error`] — `ParseError`, `ParseStatus`
//!
//! ## Logging
//!
//! Parse entry and failures are reported through the `tracing` facade at
//! `trace` and `debug` level. No subscriber is installed by this crate.

mod number;

pub mod error;
pub mod options;
pub mod parser;
pub mod types;

pub use error::{ParseError, ParseStatus, Result};
pub use options::{LeadingZero, ParseOptions};
pub use parser::{
    parse, parse_bytes, parse_bytes_with, parse_status, parse_status_with, parse_with,
};
pub use types::{TypeTag, Value};
