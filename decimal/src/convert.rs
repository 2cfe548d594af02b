//! Conversions to/from the collaborator-facing boundary types named in the
//! external-interfaces section: plain integers, `f64`, and the canonical
//! decimal string. These are the surface a SQL driver or JSON encoder
//! builds on; this crate does not itself talk to a database or a wire
//! format.

use crate::narrow::POW10;
use crate::{Decimal, Error, Result};
use alloc::string::{String, ToString};

impl Decimal {
    /// Builds a decimal of scale `0` from a signed 64-bit integer.
    pub fn from_int(i: i64) -> Self {
        let neg = i < 0;
        Decimal::from_parts(neg, i.unsigned_abs(), 0)
    }

    /// The integer value, failing with [`Error::NonInteger`] if `self` has
    /// a nonzero fractional part, or [`Error::Overflow`] if the integer
    /// part does not fit an `i64`.
    pub fn to_int(self) -> Result<i64> {
        if !self.is_integer() {
            return Err(Error::NonInteger);
        }
        let whole = self.coef / POW10[self.scale as usize];
        let magnitude = i64::try_from(whole).map_err(|_| Error::Overflow)?;
        if self.neg {
            magnitude.checked_neg().ok_or(Error::Overflow)
        } else {
            Ok(magnitude)
        }
    }

    /// The nearest representable decimal to `f`, rounded half-even to 17
    /// significant digits (`f64`'s round-trippable precision) -- the
    /// policy this crate fixes for what is inherently a lossy conversion.
    ///
    /// Fails with [`Error::Undefined`] for NaN or infinite input, and
    /// with [`Error::Overflow`]/[`Error::InvalidScale`] if the rounded
    /// value does not fit the coefficient/scale limits (e.g. `1e30`).
    pub fn from_float64(f: f64) -> Result<Self> {
        if !f.is_finite() {
            return Err(Error::Undefined);
        }
        // `{:.16e}` yields 17 significant digits (one before the point,
        // sixteen after) in a string this crate's own parser already
        // understands: "-d.ddddddddddddddddde±NN".
        let rendered = alloc::format!("{:.16e}", f);
        rendered.parse()
    }

    /// The nearest `f64` to this value. Exact for coefficients within
    /// `f64`'s 53-bit mantissa; beyond that this is a best-effort
    /// approximation, as any binary-float conversion must be.
    pub fn to_float64(self) -> f64 {
        let magnitude = self.coef as f64 * 10f64.powi(-(self.scale as i32));
        if self.neg {
            -magnitude
        } else {
            magnitude
        }
    }

    /// The canonical decimal string, for binding to a text/decimal SQL
    /// column or embedding in a JSON string.
    pub fn encode_text(self) -> String {
        self.to_string()
    }

    /// Parses a canonical decimal string, as received from a text/decimal
    /// SQL column or a JSON string. Equivalent to [`str::parse`].
    pub fn decode_text(s: &str) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_int_round_trips() {
        assert_eq!(Decimal::from_int(42).to_int().unwrap(), 42);
        assert_eq!(Decimal::from_int(-7).to_int().unwrap(), -7);
        assert_eq!(Decimal::from_int(0).sign(), 0);
    }

    #[test]
    fn to_int_rejects_fractional() {
        let d = Decimal::must_new(15, 1); // 1.5
        assert_eq!(d.to_int(), Err(Error::NonInteger));
    }

    #[test]
    fn to_int_accepts_trailing_zero_fraction() {
        let d = Decimal::must_new(500, 2); // 5.00
        assert_eq!(d.to_int().unwrap(), 5);
    }

    #[test]
    fn from_float64_rejects_non_finite() {
        assert_eq!(Decimal::from_float64(f64::NAN), Err(Error::Undefined));
        assert_eq!(Decimal::from_float64(f64::INFINITY), Err(Error::Undefined));
    }

    #[test]
    fn from_float64_simple_value() {
        let d = Decimal::from_float64(1.5).unwrap();
        assert_eq!(d.to_float64(), 1.5);
    }

    #[test]
    fn to_float64_matches_ieee_nearest() {
        let d = "3.141592653589793238".parse::<Decimal>().unwrap();
        let f = d.to_float64();
        assert!((f - core::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn encode_decode_text_round_trips() {
        let d = Decimal::must_new(-12345, 3);
        let text = d.encode_text();
        assert_eq!(Decimal::decode_text(&text).unwrap(), d);
    }
}
