//! Rounding modes and the shared round-decision algebra.
//!
//! [`round_up`] is the single place that decides whether a truncated
//! division should bump its quotient by one; both [`crate::narrow`] and
//! [`crate::wide`] call into it so the six modes behave identically
//! regardless of which layer performed the division.

/// A rounding policy for scale-reducing operations.
///
/// `HalfEven` is the default wherever a function does not take an explicit
/// mode (e.g. [`crate::Decimal::round`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even digit.
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfDown,
    /// Always away from zero.
    Up,
    /// Always toward zero (truncation).
    Down,
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
}

/// Decide whether a quotient should be incremented given the remainder
/// `r` of a division by `divisor`, the parity of the quotient's kept last
/// digit (`quotient_odd`, only consulted for `HalfEven` ties), the sign
/// (`neg`) of the value being rounded, and the rounding `mode`.
///
/// `r` and `divisor` are magnitudes (`0 <= r < divisor`); `r == 0` means
/// the division was exact and no mode ever rounds up in that case, unless
/// `sticky` says otherwise (see below).
///
/// `sticky` carries the information that some earlier, coarser division
/// already discarded a nonzero remainder beyond `r`'s own precision (e.g.
/// the guard-digit division in [`crate::arith`]'s `Quo`). When set, the
/// true value is known to sit strictly above whatever `r` alone would
/// suggest, so an apparent exact tie is resolved as "round up" instead of
/// being handed to the tie-breaking rule — this is what keeps a
/// correctly-rounded division from silently double-rounding at a
/// coincidental guard-digit boundary.
pub(crate) fn round_up(r: u128, divisor: u128, quotient_odd: bool, neg: bool, mode: RoundingMode, sticky: bool) -> bool {
    use RoundingMode::*;

    if r == 0 && !sticky {
        return false;
    }

    match mode {
        Down => false,
        Up => true,
        Ceil => !neg,
        Floor => neg,
        HalfUp | HalfDown | HalfEven => {
            if r == 0 {
                // sticky: true value is (r=0)+epsilon, i.e. just above this boundary.
                return true;
            }
            // compare r against divisor/2 without overflowing: r*2 vs divisor
            let twice_r = r << 1;
            match twice_r.cmp(&divisor) {
                core::cmp::Ordering::Less => false,
                core::cmp::Ordering::Greater => true,
                core::cmp::Ordering::Equal => {
                    if sticky {
                        true
                    } else {
                        match mode {
                            HalfUp => true,
                            HalfDown => false,
                            HalfEven => quotient_odd,
                            _ => unreachable!(),
                        }
                    }
                }
            }
        }
    }
}

use crate::narrow::{div_pow10, POW10};
use crate::{Decimal, Error, Result, MAX_COEF, MAX_PREC, MAX_SCALE};

impl Decimal {
    /// Sets the scale to exactly `scale`, rounding per `mode` if digits are
    /// discarded or padding with trailing zeros if they are added.
    ///
    /// When increasing the scale would push precision past [`MAX_PREC`],
    /// the result keeps the largest scale that still fits rather than
    /// failing -- matching the data model's "largest representable s"
    /// rule for padding.
    pub fn quantize(self, scale: u8, mode: RoundingMode) -> Result<Self> {
        if scale > MAX_SCALE {
            return Err(Error::InvalidScale);
        }
        use core::cmp::Ordering::*;
        match scale.cmp(&self.scale) {
            Equal => Ok(self),
            Less => {
                let drop = (self.scale - scale) as u32;
                let coef = div_pow10(self.coef, drop, self.neg, mode).ok_or(Error::Overflow)?;
                if coef > MAX_COEF {
                    return Err(Error::Overflow);
                }
                Ok(Decimal::from_parts(self.neg, coef, scale))
            }
            Greater => {
                let max_pad = MAX_PREC.saturating_sub(self.prec());
                let pad = ((scale - self.scale) as u32).min(max_pad);
                let coef = self
                    .coef
                    .checked_mul(POW10[pad as usize])
                    .ok_or(Error::Overflow)?;
                Ok(Decimal::from_parts(self.neg, coef, self.scale + pad as u8))
            }
        }
    }

    /// `Quantize(self, scale, HalfEven)`: the default scale-targeting
    /// rounding operation.
    pub fn round(self, scale: u8) -> Result<Self> {
        self.quantize(scale, RoundingMode::HalfEven)
    }

    /// `Quantize(self, scale, Down)`: truncation toward zero.
    pub fn trunc(self, scale: u8) -> Result<Self> {
        self.quantize(scale, RoundingMode::Down)
    }

    /// `Quantize(self, scale, Ceil)`: rounding toward positive infinity.
    pub fn ceil(self, scale: u8) -> Result<Self> {
        self.quantize(scale, RoundingMode::Ceil)
    }

    /// `Quantize(self, scale, Floor)`: rounding toward negative infinity.
    pub fn floor(self, scale: u8) -> Result<Self> {
        self.quantize(scale, RoundingMode::Floor)
    }

    /// Strips trailing zero digits from the coefficient until the scale
    /// reaches `min_scale` or there are none left to strip.
    pub fn trim(self, min_scale: u8) -> Self {
        let mut coef = self.coef;
        let mut scale = self.scale;
        while scale > min_scale && coef % 10 == 0 {
            coef /= 10;
            scale -= 1;
        }
        Decimal::from_parts(self.neg, coef, scale)
    }

    /// The unit in the last place at `self`'s current scale: `coef = 1`,
    /// same scale, always positive.
    pub fn ulp(self) -> Self {
        Decimal::from_parts(false, 1, self.scale)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use RoundingMode::*;

    #[test]
    fn ties() {
        // r=5, divisor=10 -> exact tie
        assert!(round_up(5, 10, false, false, HalfUp, false));
        assert!(!round_up(5, 10, false, false, HalfDown, false));
        assert!(!round_up(5, 10, false, false, HalfEven, false)); // kept digit even -> stays
        assert!(round_up(5, 10, true, false, HalfEven, false)); // kept digit odd -> rounds up
    }

    #[test]
    fn ceil_floor_are_sign_aware() {
        assert!(round_up(1, 10, false, false, Ceil, false));
        assert!(!round_up(1, 10, false, true, Ceil, false));
        assert!(!round_up(1, 10, false, false, Floor, false));
        assert!(round_up(1, 10, false, true, Floor, false));
    }

    #[test]
    fn up_down_ignore_sign() {
        assert!(round_up(1, 10, false, true, Up, false));
        assert!(round_up(1, 10, false, false, Up, false));
        assert!(!round_up(9, 10, false, true, Down, false));
        assert!(!round_up(9, 10, false, false, Down, false));
    }

    #[test]
    fn exact_never_rounds() {
        for mode in [HalfEven, HalfUp, HalfDown, Up, Down, Ceil, Floor] {
            assert!(!round_up(0, 10, false, false, mode, false));
            assert!(!round_up(0, 10, false, true, mode, false));
        }
    }

    #[test]
    fn sticky_breaks_apparent_exact_ties() {
        // r=0 but sticky means the true remainder is known to be > 0.
        assert!(round_up(0, 10, false, false, HalfEven, true));
        assert!(round_up(0, 10, false, false, Up, true));
        assert!(!round_up(0, 10, false, false, Down, true));
    }

    #[test]
    fn round_half_even_boundaries() {
        // 0.005 ties to the even digit: 0.00
        assert_eq!(Decimal::must_new(5, 3).round(2).unwrap(), Decimal::must_new(0, 2));
        // 0.015 ties up to the even digit 2.
        assert_eq!(Decimal::must_new(15, 3).round(2).unwrap(), Decimal::must_new(2, 2));
    }

    #[test]
    fn trunc_toward_zero() {
        assert_eq!(Decimal::must_new(-19, 3).trunc(2).unwrap(), Decimal::must_new(-1, 2));
    }

    #[test]
    fn ceil_and_floor_bracket_toward_infinity() {
        assert_eq!(Decimal::must_new(-1, 3).ceil(2).unwrap(), Decimal::must_new(0, 2));
        assert_eq!(Decimal::must_new(1, 3).floor(2).unwrap(), Decimal::must_new(0, 2));
    }

    #[test]
    fn quantize_pads_with_zeros() {
        let d = Decimal::must_new(5, 0);
        assert_eq!(d.quantize(2, HalfEven).unwrap(), Decimal::must_new(500, 2));
    }

    #[test]
    fn quantize_pad_clamps_at_max_prec() {
        let d = Decimal::from_parts(false, MAX_COEF, 0);
        // Can't pad a 19-digit coefficient any further without overflowing.
        assert_eq!(d.quantize(MAX_SCALE, HalfEven).unwrap().scale(), 0);
    }

    #[test]
    fn round_idempotent() {
        let d = Decimal::must_new(123456, 4);
        let once = d.round(2).unwrap();
        assert_eq!(once.round(2).unwrap(), once);
    }

    #[test]
    fn trim_removes_trailing_zeros() {
        let d = Decimal::must_new(1500, 3); // 1.500
        assert_eq!(d.trim(0), Decimal::must_new(15, 1)); // 1.5
    }

    #[test]
    fn trim_stops_at_min_scale() {
        let d = Decimal::must_new(1500, 3);
        assert_eq!(d.trim(2), Decimal::must_new(150, 2)); // 1.50
    }

    #[test]
    fn ulp_is_coef_one_same_scale() {
        let d = Decimal::must_new(12345, 3);
        let ulp = d.ulp();
        assert_eq!(ulp.coef(), 1);
        assert_eq!(ulp.scale(), 3);
    }
}
