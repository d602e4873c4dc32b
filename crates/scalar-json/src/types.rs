//! Parsed scalar values and their type tags.
//!
//! [`Value`] mirrors the scalar half of the JSON data model. `true` and `false`
//! are separate variants rather than a `Bool(bool)` so that every variant maps
//! one-to-one onto a [`TypeTag`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A parsed scalar JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    True,
    False,
    Number(f64),
}

/// The payload-free discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    Null,
    True,
    False,
    Number,
}

impl Value {
    /// The type tag of this value.
    pub fn get_type(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::True => TypeTag::True,
            Value::False => TypeTag::False,
            Value::Number(_) => TypeTag::Number,
        }
    }

    /// Return the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Value::Number`]. Calling this on any other
    /// variant is a programming error; use [`Value::as_number`] when the type is
    /// not known in advance.
    pub fn get_number(&self) -> f64 {
        match *self {
            Value::Number(n) => n,
            other => panic!("get_number called on a {} value", other.get_type()),
        }
    }

    /// The numeric payload, or `None` for non-number values.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// `Some(true)` / `Some(false)` for the boolean literals, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

/// Bridge into the `serde_json` value model.
///
/// Non-finite numbers cannot be represented there and become `null`, the same
/// mapping `serde_json::json!` applies.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::True => serde_json::Value::Bool(true),
            Value::False => serde_json::Value::Bool(false),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Null => "null",
            TypeTag::True => "true",
            TypeTag::False => "false",
            TypeTag::Number => "number",
        };
        f.write_str(name)
    }
}
