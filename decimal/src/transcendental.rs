//! Elementary transcendental functions: `Sqrt`, `Exp`, `Log`/`Log2`/`Log10`,
//! and the general `Pow`.
//!
//! None of these admit a closed-form computation in fixed-point decimal
//! arithmetic, so each is an iterative numeric method seeded from an
//! `f64` estimate ([`Decimal::to_float64`]) and refined with this crate's
//! own checked decimal operations, which already carry extra guard
//! digits internally (see `crate::arith::quo`) before narrowing to the
//! representable 19-digit coefficient. A few refinement steps at decimal
//! precision turn the float's ~15-17 correct digits into a result
//! correctly rounded to [`crate::MAX_PREC`] digits.
//!
//! Every function here is deterministic: the seed comes from a pure
//! `f64` computation and the refinement loop runs to a fixed
//! convergence test (two successive iterates compare equal), so the same
//! input always retraces the same iteration count and lands on the same
//! representation.

use crate::rounding::RoundingMode;
use crate::{Decimal, Error, Result};

/// `ln(2)` to 19 fractional digits (guard precision for argument
/// reduction in `exp`/`ln`).
const LN2: Decimal = Decimal::from_parts_const(false, 6_931_471_805_599_453_094, 19);

/// `ln(10)` to 18 fractional digits (19 significant digits total --
/// `ln(10)` has one integer digit, so one fewer fractional digit fits
/// than `LN2`, whose integer part is zero).
const LN10: Decimal = Decimal::from_parts_const(false, 2_302_585_092_994_045_684, 18);

/// Hard cap on series/iteration length, so a pathological input can never
/// spin forever: every series used here converges to `MAX_PREC` digits
/// in well under this many terms.
const MAX_ITERS: u32 = 200;

impl Decimal {
    /// `const`-friendly sibling of [`Decimal::from_parts`], for the
    /// guard-precision constants in this module.
    pub(crate) const fn from_parts_const(neg: bool, coef: u64, scale: u8) -> Decimal {
        Decimal { neg: neg && coef != 0, coef, scale }
    }

    /// The non-negative square root. Requires `self >= 0`.
    ///
    /// Newton's method (`y <- (y + x/y)/2`), seeded from `f64::sqrt` and
    /// refined until two successive iterates agree exactly.
    pub fn sqrt(self) -> Result<Self> {
        if self.sign() < 0 {
            return Err(Error::Undefined);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let mut y = seed(self.to_float64().sqrt())?;
        for _ in 0..MAX_ITERS {
            let q = self.checked_div(y)?;
            let next = y.checked_add(q)?.checked_div(Decimal::from_int(2))?;
            if next == y {
                return Ok(next);
            }
            y = next;
        }
        Ok(y)
    }

    /// The natural exponential `e^self`.
    ///
    /// Argument reduction `self = k*ln2 + r` with `|r| <= ln2/2`, Taylor
    /// series for `e^r`, then rescale by `2^k`. Fails with
    /// [`Error::Overflow`] if `2^k` (and hence the true result) does not
    /// fit the coefficient limit.
    pub fn exp(self) -> Result<Self> {
        let x_f = self.to_float64();
        if !x_f.is_finite() {
            return Err(Error::Overflow);
        }
        let k_f = (x_f / core::f64::consts::LN_2).round();
        // Anything requiring 2^k at this magnitude overflows MAX_COEF
        // long before we'd even finish computing it.
        if !(i32::MIN as f64..=i32::MAX as f64).contains(&k_f) {
            return Err(Error::Overflow);
        }
        let k = k_f as i32;
        let reduction = LN2.checked_mul(Decimal::from_int(k as i64))?;
        let r = self.checked_sub(reduction)?;

        let mut term = Decimal::ONE;
        let mut sum = Decimal::ONE;
        for n in 1..=MAX_ITERS {
            term = term.checked_mul(r)?.checked_div(Decimal::from_int(n as i64))?;
            let next = sum.checked_add(term)?;
            if next == sum {
                sum = next;
                break;
            }
            sum = next;
        }

        let scale_factor = Decimal::must_new(2, 0).pow_int(k)?;
        sum.checked_mul(scale_factor)
    }

    /// The natural logarithm. Requires `self > 0`.
    ///
    /// Reduces `self = m * 2^e` with `1 <= m < 2`, then
    /// `ln(self) = e*ln2 + ln(m)`, with `ln(m)` evaluated via the atanh
    /// series `ln(m) = 2*atanh(z)`, `z = (m-1)/(m+1)`.
    pub fn ln(self) -> Result<Self> {
        if self.sign() <= 0 {
            return Err(Error::Undefined);
        }
        let x_f = self.to_float64();
        let mut e = if x_f.is_finite() && x_f > 0.0 { x_f.log2().floor() as i32 } else { 0 };

        let mut m = self.checked_div(Decimal::must_new(2, 0).pow_int(e)?)?;
        // The f64 estimate of `e` can be off by one at a power-of-two
        // boundary; nudge it back into [1, 2) with exact decimal compares.
        let one = Decimal::ONE;
        let two = Decimal::must_new(2, 0);
        while m < one {
            m = m.checked_mul(two)?;
            e -= 1;
        }
        while m >= two {
            m = m.checked_div(two)?;
            e += 1;
        }

        let z = m.checked_sub(one)?.checked_div(m.checked_add(one)?)?;
        let z2 = z.checked_mul(z)?;
        let mut term = z;
        let mut sum = z;
        let mut k = 1u32;
        while k <= MAX_ITERS {
            term = term.checked_mul(z2)?;
            let denom = Decimal::from_int((2 * k + 1) as i64);
            let addend = term.checked_div(denom)?;
            let next = sum.checked_add(addend)?;
            if next == sum {
                sum = next;
                break;
            }
            sum = next;
            k += 1;
        }

        let log_m = sum.checked_mul(two)?;
        let e_term = Decimal::from_int(e as i64).checked_mul(LN2)?;
        log_m.checked_add(e_term)
    }

    /// `log2(self) = ln(self) / ln(2)`.
    pub fn log2(self) -> Result<Self> {
        self.ln()?.checked_div(LN2)
    }

    /// `log10(self) = ln(self) / ln(10)`.
    pub fn log10(self) -> Result<Self> {
        self.ln()?.checked_div(LN10)
    }

    /// `self^y` for an arbitrary decimal exponent.
    ///
    /// When `y` is an integer, delegates to [`Decimal::pow_int`] (exact,
    /// no transcendental involved). Otherwise requires `self > 0` and
    /// computes `exp(y * ln(self))`; `self = 0` with `y > 0` is `0`.
    /// `Pow(0, 0)` is [`Error::Undefined`] -- unlike `PowInt(0, 0) = 1`,
    /// since there is no principal value for `0^0` once `0` and `0.0`
    /// are both admissible exponents.
    pub fn pow(self, y: Self) -> Result<Self> {
        if self.is_zero() && y.is_zero() {
            return Err(Error::Undefined);
        }
        if y.is_integer() {
            if let Ok(n) = y.to_int() {
                if let Ok(n) = i32::try_from(n) {
                    return self.pow_int(n);
                }
            }
        }
        if self.is_zero() {
            return if y.sign() > 0 { Ok(Decimal::ZERO) } else { Err(Error::Undefined) };
        }
        if self.sign() < 0 {
            return Err(Error::Undefined);
        }
        let exponent = y.checked_mul(self.ln()?)?;
        exponent.exp()
    }
}

/// Builds a seed `Decimal` from an `f64` estimate, falling back to `ONE`
/// if the estimate is non-finite or non-positive (e.g. `sqrt` of a value
/// so small its `f64` square root underflows to `0.0`) -- Newton's
/// method converges from any positive starting point, just slower from
/// a bad one.
fn seed(f: f64) -> Result<Decimal> {
    if f.is_finite() && f > 0.0 {
        Decimal::from_float64(f)
    } else {
        Ok(Decimal::ONE)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sqrt_of_negative_is_undefined() {
        assert_eq!(Decimal::must_new(-1, 0).sqrt(), Err(Error::Undefined));
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        assert_eq!(Decimal::ZERO.sqrt().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn sqrt_of_perfect_square() {
        let d = Decimal::must_new(4, 0).sqrt().unwrap();
        assert_eq!(d, Decimal::must_new(2, 0));
    }

    #[test]
    fn sqrt_squared_recovers_input() {
        let x = Decimal::must_new(2, 0);
        let root = x.sqrt().unwrap();
        let squared = root.checked_mul(root).unwrap();
        let diff = (squared - x).to_float64().abs();
        assert!(diff < 1e-17, "diff = {diff}");
    }

    #[test]
    fn exp_of_zero_is_one() {
        assert_eq!(Decimal::ZERO.exp().unwrap(), Decimal::ONE);
    }

    #[test]
    fn exp_log_are_inverses() {
        let x = Decimal::must_new(2, 0);
        let round_tripped = x.ln().unwrap().exp().unwrap();
        let diff = (round_tripped - x).to_float64().abs();
        assert!(diff < 1e-15, "diff = {diff}");
    }

    #[test]
    fn ln_of_nonpositive_is_undefined() {
        assert_eq!(Decimal::ZERO.ln(), Err(Error::Undefined));
        assert_eq!(Decimal::must_new(-1, 0).ln(), Err(Error::Undefined));
    }

    #[test]
    fn ln_of_one_is_zero() {
        assert!(Decimal::ONE.ln().unwrap().is_zero());
    }

    #[test]
    fn log2_and_log10_of_their_base() {
        let two = Decimal::must_new(2, 0);
        let ten = Decimal::must_new(10, 0);
        assert!((two.log2().unwrap().to_float64() - 1.0).abs() < 1e-15);
        assert!((ten.log10().unwrap().to_float64() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn pow_integer_exponent_matches_pow_int() {
        let x = Decimal::must_new(3, 0);
        let y = Decimal::must_new(4, 0);
        assert_eq!(x.pow(y).unwrap(), x.pow_int(4).unwrap());
    }

    #[test]
    fn pow_zero_to_positive_is_zero() {
        assert_eq!(Decimal::ZERO.pow(Decimal::must_new(5, 1)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn pow_zero_to_zero_is_undefined() {
        assert_eq!(Decimal::ZERO.pow(Decimal::ZERO), Err(Error::Undefined));
    }

    #[test]
    fn pow_negative_base_fractional_exponent_is_undefined() {
        let x = Decimal::must_new(-2, 0);
        let y = Decimal::must_new(5, 1); // 0.5
        assert_eq!(x.pow(y), Err(Error::Undefined));
    }

    #[test]
    fn pow_fractional_exponent() {
        let x = Decimal::must_new(4, 0);
        let y = Decimal::must_new(5, 1); // 0.5 -- sqrt
        let result = x.pow(y).unwrap();
        let diff = (result.to_float64() - 2.0).abs();
        assert!(diff < 1e-14, "diff = {diff}");
    }
}
