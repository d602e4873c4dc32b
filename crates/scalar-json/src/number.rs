//! Numeric token scanning and conversion.
//!
//! The scanner recognizes the longest prefix of the input matching
//!
//! ```text
//! -? digits ( . digits )? ( [eE] [+-]? digits )?
//! -  . digits ( [eE] [+-]? digits )?
//! ```
//!
//! and converts exactly that slice. The fraction check looks only at bytes
//! inside the token, so a stray `.` later in the input never affects the
//! number. The one rule that looks past the token is the leading-zero rule:
//! under the default policies a number starting with `0` must be followed by
//! end of input or `.`.
//!
//! Conversion goes through `str::parse::<f64>`, which is locale-independent and
//! correctly rounded. The grammar admits no `inf`/`nan` spellings, so an
//! infinite result can only mean the magnitude overflowed.

use crate::options::LeadingZero;

/// A successfully scanned number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NumberToken {
    pub value: f64,
    /// Length of the numeric text in bytes.
    pub len: usize,
}

/// Why a numeric token was rejected. Offsets are supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberError {
    /// Bad first byte, no digits after the sign, or a `.` without a following digit.
    Invalid,
    /// A leading `0` followed by something the active policy forbids.
    LeadingZero,
    /// The value overflows `f64`.
    TooBig,
}

/// Scan and convert the number at the start of `bytes`.
///
/// `bytes` runs to the end of the input, so the byte after a leading `0` is
/// visible even when it is not part of the number.
pub(crate) fn scan(bytes: &[u8], leading_zero: LeadingZero) -> Result<NumberToken, NumberError> {
    let digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut i = 0;
    match bytes.first() {
        Some(b'-') => i += 1,
        Some(b) if b.is_ascii_digit() => {}
        _ => return Err(NumberError::Invalid),
    }

    // A bare leading `0` may only be followed by end of input or `.`; the
    // check does not apply after a minus sign.
    if leading_zero != LeadingZero::Strict
        && bytes[0] == b'0'
        && !matches!(bytes.get(1), None | Some(b'.'))
    {
        return Err(NumberError::LeadingZero);
    }

    let int_start = i;
    while digit_at(i) {
        i += 1;
    }
    if leading_zero == LeadingZero::Strict && i - int_start > 1 && bytes[int_start] == b'0' {
        return Err(NumberError::LeadingZero);
    }

    // The integer part may be empty after a sign (`-.5`), but then a
    // fraction must follow.
    if bytes.get(i) == Some(&b'.') {
        if !digit_at(i + 1) {
            return Err(NumberError::Invalid);
        }
        i += 1;
        while digit_at(i) {
            i += 1;
        }
    } else if i == int_start {
        return Err(NumberError::Invalid);
    }

    // An exponent marker without digits is not part of the number; it stays
    // in the input as trailing content.
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while digit_at(j) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let text = std::str::from_utf8(&bytes[..i]).map_err(|_| NumberError::Invalid)?;
    let value: f64 = text.parse().map_err(|_| NumberError::Invalid)?;
    if value.is_infinite() {
        return Err(NumberError::TooBig);
    }

    Ok(NumberToken { value, len: i })
}
