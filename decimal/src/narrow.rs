//! Narrow (`u64`-coefficient) arithmetic.
//!
//! These are the low-level building blocks the kernel (`crate::arith`)
//! reaches for when both operands and the result are known to fit in a
//! `u64`. Anything that might not fit gets promoted to [`crate::wide`]
//! first.

use crate::rounding::{round_up, RoundingMode};
use crate::{Error, Result};

/// Powers of ten up to `10^19`, i.e. the full range of a `u64` coefficient.
pub(crate) const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Number of decimal digits in `x`, by table lookup on [`POW10`].
///
/// Zero is reported as having 1 digit, matching the convention in the
/// data model (`prec(0) = 1` for overflow-check purposes).
pub(crate) fn digit_count(x: u64) -> u32 {
    match POW10[1..].iter().position(|&p| x < p) {
        Some(i) => (i + 1) as u32,
        None => 20,
    }
}

/// Count of leading zero bits, matching `u64::leading_zeros`.
pub(crate) fn lz_count(x: u64) -> u32 {
    x.leading_zeros()
}

/// Checked `a + b`, `None` on overflow.
pub(crate) fn add(a: u64, b: u64) -> Option<u64> {
    a.checked_add(b)
}

/// Checked `a - b`, `None` on underflow (`a < b`).
pub(crate) fn sub(a: u64, b: u64) -> Option<u64> {
    a.checked_sub(b)
}

/// Full, lossless `u64 x u64 -> u128` product.
pub(crate) fn mul_full(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// `a * 10^k`, promoting to `u128` since the product may exceed `u64`.
pub(crate) fn mul_pow10(a: u64, k: u32) -> u128 {
    if k == 0 {
        a as u128
    } else {
        (a as u128) * pow10_u128(k)
    }
}

/// `a / 10^k` with the discarded tail rounded per `mode`; `neg` carries the
/// sign of the value being rounded (`Ceil`/`Floor` are sign-aware).
///
/// Returns `None` only if `k` is out of the supported `0..=38` range.
pub(crate) fn div_pow10(a: u64, k: u32, neg: bool, mode: RoundingMode) -> Option<u64> {
    div_pow10_sticky(a, k, neg, mode, false)
}

/// Like [`div_pow10`], but takes an explicit sticky bit (see
/// [`crate::rounding::round_up`]) rather than assuming the caller's `a`
/// already carries the entire discarded remainder.
pub(crate) fn div_pow10_sticky(a: u64, k: u32, neg: bool, mode: RoundingMode, sticky: bool) -> Option<u64> {
    if k == 0 {
        return Some(a);
    }
    if k > 38 {
        return None;
    }
    let divisor = pow10_u128(k);
    let a = a as u128;
    let (q, r) = (a / divisor, a % divisor);
    let q = q as u64; // k >= 1 here and a <= u64::MAX, so q always fits
    if round_up(r, divisor, q & 1 == 1, neg, mode, sticky) {
        q.checked_add(1)
    } else {
        Some(q)
    }
}

/// `10^k` as a `u128`, for `0 <= k <= 38`.
pub(crate) fn pow10_u128(k: u32) -> u128 {
    debug_assert!(k <= 38);
    10u128.pow(k)
}

/// `a^n` in narrow arithmetic, failing with [`Error::Overflow`] if any
/// intermediate product would not fit in a `u64`.
pub(crate) fn checked_pow(mut a: u64, mut n: u32) -> Result<u64> {
    let mut acc: u64 = 1;
    while n > 0 {
        if n & 1 == 1 {
            acc = acc.checked_mul(a).ok_or(Error::Overflow)?;
        }
        n >>= 1;
        if n > 0 {
            a = a.checked_mul(a).ok_or(Error::Overflow)?;
        }
    }
    Ok(acc)
}
