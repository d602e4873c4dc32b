//! Recursive-descent parser for scalar JSON text.
//!
//! The parser walks the input bytes with a single cursor:
//!
//! - leading whitespace is skipped
//! - the lookahead byte selects a literal matcher (`t`, `f`, `n`), reports
//!   `ExpectValue` at end of input, or falls through to the number scanner
//! - trailing whitespace is skipped, and anything left over is
//!   `RootNotSingular`
//!
//! # Key design decisions
//!
//! - **Byte cursor**: the grammar is pure ASCII, so the parser works on `&[u8]`
//!   and reports byte offsets. `&str` inputs are parsed through `as_bytes`.
//! - **End of input is the end of the slice**: a NUL byte is ordinary content
//!   and is rejected like any other unexpected byte.
//! - **Two entry shapes**: [`parse`] returns `Result<Value>`; [`parse_status`]
//!   returns the flat `(Value, ParseStatus)` pair, with `Value::Null` on every
//!   failure.

use tracing::{debug, trace};

use crate::error::{ParseError, ParseStatus, Result};
use crate::number::{self, NumberError};
use crate::options::{LeadingZero, ParseOptions};
use crate::types::Value;

/// Parse a scalar JSON value with the default options.
///
/// ```
/// use scalar_json::{parse, ParseError, Value};
///
/// assert_eq!(parse(" true "), Ok(Value::True));
/// assert_eq!(parse("-1.5e3"), Ok(Value::Number(-1500.0)));
/// assert_eq!(parse("1 2"), Err(ParseError::RootNotSingular { offset: 2 }));
/// ```
pub fn parse(json: &str) -> Result<Value> {
    parse_bytes_with(json.as_bytes(), &ParseOptions::default())
}

/// Parse a scalar JSON value with explicit [`ParseOptions`].
pub fn parse_with(json: &str, options: &ParseOptions) -> Result<Value> {
    parse_bytes_with(json.as_bytes(), options)
}

/// Parse a raw byte buffer. The input does not need to be valid UTF-8; any
/// non-ASCII byte is simply an invalid or trailing character.
pub fn parse_bytes(json: &[u8]) -> Result<Value> {
    parse_bytes_with(json, &ParseOptions::default())
}

/// Parse a raw byte buffer with explicit [`ParseOptions`]. Every other entry
/// point funnels into this one.
pub fn parse_bytes_with(json: &[u8], options: &ParseOptions) -> Result<Value> {
    trace!(len = json.len(), "parsing scalar json");

    let result = Parser::new(json, options).parse_root();

    if let Err(e) = &result {
        debug!(status = ?e.status(), offset = e.offset(), "scalar json parse failed");
    }
    result
}

/// Parse and report a flat status alongside the value.
///
/// The value is `Value::Null` whenever the status is not `ParseStatus::Ok`.
pub fn parse_status(json: &str) -> (Value, ParseStatus) {
    parse_status_with(json, &ParseOptions::default())
}

/// [`parse_status`] with explicit [`ParseOptions`].
pub fn parse_status_with(json: &str, options: &ParseOptions) -> (Value, ParseStatus) {
    match parse_with(json, options) {
        Ok(value) => (value, ParseStatus::Ok),
        Err(e) => (Value::Null, e.status()),
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(bytes: &'a [u8], options: &'a ParseOptions) -> Self {
        Self {
            bytes,
            pos: 0,
            options,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn parse_root(&mut self) -> Result<Value> {
        self.parse_whitespace();
        let value = self.parse_value()?;
        self.parse_whitespace();
        if self.pos < self.bytes.len() {
            return Err(ParseError::RootNotSingular { offset: self.pos });
        }
        Ok(value)
    }

    fn parse_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b't') => self.parse_literal("true", Value::True),
            Some(b'f') => self.parse_literal("false", Value::False),
            Some(b'n') => self.parse_literal("null", Value::Null),
            None => Err(ParseError::ExpectValue { offset: self.pos }),
            Some(_) => self.parse_number(),
        }
    }

    /// Match `literal` exactly at the cursor. The caller has already seen the
    /// first byte.
    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value> {
        let start = self.pos;
        debug_assert_eq!(self.peek(), literal.as_bytes().first().copied());

        let end = start + literal.len();
        match self.bytes.get(start..end) {
            Some(text) if text == literal.as_bytes() => {
                self.pos = end;
                Ok(value)
            }
            _ => Err(ParseError::InvalidValue { offset: start }),
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let policy = self.options.leading_zero;
        match number::scan(&self.bytes[start..], policy) {
            Ok(token) => {
                self.pos += token.len;
                Ok(Value::Number(token.value))
            }
            Err(NumberError::Invalid) => Err(ParseError::InvalidValue { offset: start }),
            Err(NumberError::TooBig) => Err(ParseError::NumberTooBig { offset: start }),
            Err(NumberError::LeadingZero) => Err(match policy {
                LeadingZero::RootNotSingular => ParseError::RootNotSingular { offset: start },
                LeadingZero::InvalidValue | LeadingZero::Strict => {
                    ParseError::InvalidValue { offset: start }
                }
            }),
        }
    }
}
