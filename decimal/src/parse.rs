//! Decimal-string grammar: `FromStr` for [`Decimal`].
//!
//! ```text
//! decimal  := sign? ( integer fraction? | "." integer ) exponent?
//! sign     := "+" | "-"
//! integer  := digit+
//! fraction := "." digit*
//! exponent := ("e"|"E") sign? digit+
//! digit    := "0".."9"
//! ```
//!
//! Underscores are not permitted. Leading zeros are permitted but not
//! required. Whitespace around the number is not stripped; callers trim.

use crate::{Decimal, Error, Result};
use core::str::FromStr;

/// Splits `rest` at the first `e`/`E` not already consumed as a digit,
/// returning the mantissa bytes and the parsed exponent value (`0` if
/// there was no exponent part at all).
fn split_exponent(rest: &[u8]) -> Result<(&[u8], i32)> {
    match rest.iter().position(|&b| b == b'e' || b == b'E') {
        None => Ok((rest, 0)),
        Some(i) => {
            let mantissa = &rest[..i];
            let exp_bytes = &rest[i + 1..];
            if exp_bytes.is_empty() {
                return Err(Error::InvalidSyntax);
            }
            let (exp_neg, exp_digits) = match exp_bytes[0] {
                b'+' => (false, &exp_bytes[1..]),
                b'-' => (true, &exp_bytes[1..]),
                _ => (false, exp_bytes),
            };
            if exp_digits.is_empty() || !exp_digits.iter().all(u8::is_ascii_digit) {
                return Err(Error::InvalidSyntax);
            }
            let mut value: i32 = 0;
            for &b in exp_digits {
                let digit = (b - b'0') as i32;
                value = value.checked_mul(10).and_then(|v| v.checked_add(digit)).ok_or(Error::Overflow)?;
            }
            Ok((mantissa, if exp_neg { -value } else { value }))
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(Error::InvalidSyntax);
        }

        let (neg, rest) = match bytes[0] {
            b'+' => (false, &bytes[1..]),
            b'-' => (true, &bytes[1..]),
            _ => (false, bytes),
        };

        let (mantissa, exponent) = split_exponent(rest)?;

        let point = mantissa.iter().position(|&b| b == b'.');
        let (int_digits, frac_digits) = match point {
            Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
            None => (mantissa, &mantissa[..0]),
        };

        // Two grammar alternatives: "integer fraction?" (fraction may have
        // zero digits after the point, e.g. "5.") or ".integer" (no
        // leading integer part, but the fraction must then supply at
        // least one digit, e.g. ".5"; a bare "." satisfies neither).
        if int_digits.is_empty() && (point.is_none() || frac_digits.is_empty()) {
            return Err(Error::InvalidSyntax);
        }
        if !int_digits.iter().all(u8::is_ascii_digit) || !frac_digits.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidSyntax);
        }

        let mut coef: u64 = 0;
        for &b in int_digits.iter().chain(frac_digits.iter()) {
            let digit = (b - b'0') as u64;
            coef = coef.checked_mul(10).and_then(|c| c.checked_add(digit)).ok_or(Error::Overflow)?;
        }

        // scale = (fraction digit count) - (exponent value); a negative
        // scale is absorbed by multiplying the coefficient by 10^-scale.
        let scale = frac_digits.len() as i64 - exponent as i64;
        let (coef, scale) = if scale < 0 {
            let shift = (-scale) as u32;
            let coef = (0..shift).try_fold(coef, |c, _| c.checked_mul(10)).ok_or(Error::Overflow)?;
            (coef, 0u32)
        } else {
            (coef, scale as u32)
        };

        if scale > crate::MAX_SCALE as u32 {
            return Err(Error::InvalidScale);
        }
        if coef > crate::MAX_COEF {
            return Err(Error::Overflow);
        }

        Ok(Decimal::from_parts(neg, coef, scale as u8))
    }
}
