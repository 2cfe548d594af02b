//! `core::ops` trait impls.
//!
//! Every operator here panics on error (overflow, division by zero),
//! mirroring how the primitive integer types behave under `+`/`/` in a
//! debug build. Callers that want the error instead of a panic use the
//! `Decimal` methods directly ([`Decimal::checked_add`] and friends),
//! which this module's impls simply delegate to.

use crate::rounding::RoundingMode;
use crate::{arith, Decimal};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

impl Decimal {
    /// `self + rhs`.
    pub fn checked_add(self, rhs: Self) -> crate::Result<Self> {
        arith::add(&self, &rhs)
    }

    /// `self - rhs`.
    pub fn checked_sub(self, rhs: Self) -> crate::Result<Self> {
        arith::sub(&self, &rhs)
    }

    /// `self * rhs`.
    pub fn checked_mul(self, rhs: Self) -> crate::Result<Self> {
        arith::mul(&self, &rhs)
    }

    /// `self / rhs`, rounded [`RoundingMode::HalfEven`].
    pub fn checked_div(self, rhs: Self) -> crate::Result<Self> {
        arith::quo(&self, &rhs, RoundingMode::HalfEven)
    }

    /// `self / rhs`, rounded per an explicit mode.
    pub fn checked_div_rounded(self, rhs: Self, mode: RoundingMode) -> crate::Result<Self> {
        arith::quo(&self, &rhs, mode)
    }

    /// Truncated integer quotient and remainder: `(trunc(self/rhs), self - q*rhs)`.
    pub fn checked_div_rem(self, rhs: Self) -> crate::Result<(Self, Self)> {
        arith::quo_rem(&self, &rhs)
    }

    /// `self % rhs`: the remainder of truncated integer division.
    pub fn checked_rem(self, rhs: Self) -> crate::Result<Self> {
        arith::quo_rem(&self, &rhs).map(|(_, r)| r)
    }

    /// `self^n` for a signed integer exponent. `self.pow_int(0) ==
    /// Decimal::ONE` for every `self`, including zero; negative `n` is
    /// `1 / self.pow_int(-n)`, which fails for a zero base.
    pub fn pow_int(self, n: i32) -> crate::Result<Self> {
        arith::pow_int(&self, n)
    }

    /// `self + a*b`, narrowed once.
    pub fn checked_fma(self, a: Self, b: Self) -> crate::Result<Self> {
        arith::fma(&a, &b, &self)
    }

    /// `self + a*b`.
    pub fn checked_add_mul(self, a: Self, b: Self) -> crate::Result<Self> {
        arith::add_mul(&self, &a, &b)
    }

    /// `self + a/b`, rounded [`RoundingMode::HalfEven`].
    pub fn checked_add_quo(self, a: Self, b: Self) -> crate::Result<Self> {
        arith::add_quo(&self, &a, &b, RoundingMode::HalfEven)
    }
}

macro_rules! panicking_binop {
    ($trait:ident, $method:ident, $checked:ident, $msg:literal) => {
        impl $trait for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: Decimal) -> Decimal {
                self.$checked(rhs).expect($msg)
            }
        }
    };
}

panicking_binop!(Add, add, checked_add, "decimal addition overflowed");
panicking_binop!(Sub, sub, checked_sub, "decimal subtraction overflowed");
panicking_binop!(Mul, mul, checked_mul, "decimal multiplication overflowed");
panicking_binop!(Div, div, checked_div, "decimal division failed");
panicking_binop!(Rem, rem, checked_rem, "decimal remainder failed");

impl Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal::from_parts(!self.neg, self.coef, self.scale)
    }
}

impl AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        *self = *self + rhs;
    }
}

impl SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Decimal) {
        *self = *self - rhs;
    }
}

impl MulAssign for Decimal {
    fn mul_assign(&mut self, rhs: Decimal) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_sub_mul_operators() {
        let a = Decimal::must_new(150, 2); // 1.50
        let b = Decimal::must_new(5, 1); // 0.5
        assert_eq!(a + b, Decimal::must_new(200, 2));
        assert_eq!(a - b, Decimal::must_new(100, 2));
        assert_eq!(a * b, Decimal::must_new(75, 2)); // 0.75
    }

    #[test]
    fn div_and_rem() {
        let a = Decimal::must_new(7, 0);
        let b = Decimal::must_new(2, 0);
        assert_eq!(a % b, Decimal::must_new(1, 0));
    }

    #[test]
    #[should_panic(expected = "decimal division failed")]
    fn div_by_zero_panics() {
        let _ = Decimal::ONE / Decimal::ZERO;
    }

    #[test]
    fn neg_flips_sign_but_not_zero() {
        assert_eq!(-Decimal::must_new(5, 0), Decimal::must_new(-5, 0));
        assert_eq!((-Decimal::ZERO).sign(), 0);
    }

    #[test]
    fn assign_operators() {
        let mut a = Decimal::must_new(1, 0);
        a += Decimal::must_new(2, 0);
        assert_eq!(a, Decimal::must_new(3, 0));
        a *= Decimal::must_new(2, 0);
        assert_eq!(a, Decimal::must_new(6, 0));
    }

    #[test]
    fn pow_int_and_fma() {
        let x = Decimal::must_new(2, 0);
        assert_eq!(x.pow_int(3).unwrap(), Decimal::must_new(8, 0));
        assert_eq!(Decimal::must_new(1, 0).checked_fma(x, Decimal::must_new(3, 0)).unwrap(), Decimal::must_new(7, 0));
    }
}
