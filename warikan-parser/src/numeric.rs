//! Text to number conversions for input fields.

use crate::error::ParseError;
use nom::{Parser, combinator::all_consuming, number::complete::recognize_float};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Keeps only ASCII digits and reads them as a base-10 integer.
///
/// Empty or digit-free input is `0`; a digit run too long for `u64`
/// saturates at `u64::MAX`.
pub fn sanitize_digits(text: &str) -> u64 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .try_fold(0u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        })
        .unwrap_or(u64::MAX)
}

/// Reads `text` as a decimal number without discarding any characters.
///
/// Surrounding whitespace is ignored and blank input is `0`. Accepts an
/// optional sign, a fractional part and an exponent (`-1.5`, `.5`, `1e3`).
pub fn parse_strict_number(text: &str) -> Result<Decimal, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let invalid = || ParseError::InvalidNumber {
        input: text.to_string(),
    };

    let (_, literal) = all_consuming(recognize_float::<&str, nom::error::Error<&str>>)
        .parse(trimmed)
        .map_err(|_| invalid())?;

    decimal_from_literal(literal).ok_or_else(invalid)
}

fn decimal_from_literal(literal: &str) -> Option<Decimal> {
    let lowered = literal.to_ascii_lowercase();
    let (sign, unsigned) = match lowered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", lowered.strip_prefix('+').unwrap_or(&lowered)),
    };
    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa);
    if !mantissa.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let mantissa = if mantissa.starts_with('.') {
        format!("0{mantissa}")
    } else {
        mantissa.to_string()
    };

    match exponent {
        Some(exponent) => Decimal::from_scientific(&format!("{sign}{mantissa}e{exponent}")).ok(),
        None => Decimal::from_str(&format!("{sign}{mantissa}")).ok(),
    }
}

/// Parses `text` as JSON.
pub fn parse_json(text: &str) -> Result<serde_json::Value, ParseError> {
    serde_json::from_str(text).map_err(|err| ParseError::InvalidJson {
        detail: err.to_string(),
    })
}
