//! Wide (128-bit intermediate) arithmetic.
//!
//! The data model caps a coefficient at 19 decimal digits (`MaxCoef =
//! 10^19 - 1`), and a full `u64 x u64` product needs at most 38 digits —
//! comfortably inside a native `u128` (whose magnitude covers up to 38-39
//! decimal digits). Rather than hand-roll a `hi:lo` limb pair the way a
//! language without a 128-bit integer would have to, this layer is a thin
//! newtype over `u128`: Rust already gives us the wide type for free.
//!
//! `Wide` exposes the same capability set as [`crate::narrow`]
//! (add/sub-with-overflow, full multiply, divmod-by-narrow,
//! rescale-with-mode) so the kernel can promote without changing its
//! algorithm shape.

use crate::rounding::{round_up, RoundingMode};
use crate::{Error, Result};

/// A 128-bit unsigned intermediate value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Wide(pub u128);

impl Wide {
    pub(crate) fn from_u64(x: u64) -> Self {
        Wide(x as u128)
    }

    pub(crate) fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Wide)
    }

    pub(crate) fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Wide)
    }

    /// Lossless `u64 x u64` product, as a `Wide`.
    pub(crate) fn mul_u64(a: u64, b: u64) -> Self {
        Wide(super::narrow::mul_full(a, b))
    }

    pub(crate) fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Wide)
    }

    /// `self * 10^k`.
    pub(crate) fn checked_mul_pow10(self, k: u32) -> Option<Self> {
        self.0.checked_mul(super::narrow::pow10_u128(k)).map(Wide)
    }

    /// Divmod by a narrow (`u64`) denominator: the only wide÷narrow shape
    /// the kernel needs. `den == 0` is a caller error (checked upstream as
    /// `DivisionByZero`), not modeled here.
    pub(crate) fn divmod_u64(self, den: u64) -> (Wide, u64) {
        let den = den as u128;
        (Wide(self.0 / den), (self.0 % den) as u64)
    }

    /// Number of decimal digits, by repeated comparison against the power
    /// ladder (there is no compact lookup table at 128 bits, so this walks
    /// up rather than binary-searching a fixed array).
    pub(crate) fn digit_count(self) -> u32 {
        let mut digits = 1;
        let mut bound: u128 = 10;
        while self.0 >= bound {
            digits += 1;
            match bound.checked_mul(10) {
                Some(next) => bound = next,
                None => return digits + 1, // bound would overflow u128; self.0 has one more digit
            }
        }
        digits
    }

    /// Divide by `10^drop_digits`, rounding per `mode`, staying in `Wide`
    /// rather than narrowing -- the caller may not yet know whether the
    /// result fits in a `u64` (e.g. when shaving guard digits off an
    /// intermediate quotient one step at a time).
    ///
    /// `sticky` (see [`crate::rounding::round_up`]) lets a caller fold in
    /// a remainder truncated by some earlier, coarser operation; pass
    /// `false` when `self` is already exact.
    pub(crate) fn div_pow10_sticky(self, drop_digits: u32, neg: bool, mode: RoundingMode, sticky: bool) -> Wide {
        if drop_digits == 0 {
            return if sticky && round_up(0, 1, self.0 & 1 == 1, neg, mode, true) {
                Wide(self.0 + 1)
            } else {
                self
            };
        }
        let divisor = super::narrow::pow10_u128(drop_digits);
        let q = self.0 / divisor;
        let r = self.0 % divisor;
        let bump = round_up(r, divisor, q & 1 == 1, neg, mode, sticky);
        Wide(if bump { q + 1 } else { q })
    }

    /// Shrink to a narrow `u64`, rounding the discarded low digits per
    /// `mode`. Fails with [`Error::Overflow`] if the rounded result still
    /// does not fit in a `u64`.
    pub(crate) fn narrow_round(self, drop_digits: u32, neg: bool, mode: RoundingMode) -> Result<u64> {
        self.narrow_round_sticky(drop_digits, neg, mode, false)
    }

    /// Like [`Wide::narrow_round`], but takes an explicit sticky bit (see
    /// [`crate::rounding::round_up`]) for callers (namely `Quo`) whose
    /// `self` is already a truncated quotient with a discarded remainder.
    pub(crate) fn narrow_round_sticky(self, drop_digits: u32, neg: bool, mode: RoundingMode, sticky: bool) -> Result<u64> {
        let rounded = self.div_pow10_sticky(drop_digits, neg, mode, sticky);
        u64::try_from(rounded.0).map_err(|_| Error::Overflow)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rounding::RoundingMode::*;

    #[test]
    fn mul_u64_is_lossless() {
        let w = Wide::mul_u64(u64::MAX, u64::MAX);
        assert_eq!(w.0, (u64::MAX as u128) * (u64::MAX as u128));
    }

    #[test]
    fn digit_count_matches_narrow_for_u64_range() {
        for x in [0u64, 1, 9, 10, 99, 100, 9_999_999_999_999_999_999] {
            assert_eq!(Wide::from_u64(x).digit_count(), super::super::narrow::digit_count(x));
        }
    }

    #[test]
    fn narrow_round_overflows_when_too_big() {
        let w = Wide(u128::from(u64::MAX) + 1);
        assert!(w.narrow_round(0, false, Down).is_err());
    }

    #[test]
    fn narrow_round_half_even() {
        let w = Wide(25); // drop 1 digit -> tie between 2 and 3, 2 is even
        assert_eq!(w.narrow_round(1, false, HalfEven).unwrap(), 2);
    }
}
