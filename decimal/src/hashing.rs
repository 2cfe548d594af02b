//! `Hash`, consistent with the value-based `Eq` in `comparison.rs`.
//!
//! Two decimals that compare equal must hash equal, but equal decimals
//! can carry different `scale` (`1.0` vs `1.00`). This canonicalizes by
//! trimming trailing zeros out of the coefficient (and scale along with
//! them) before hashing, so both representations fold to the same
//! `(neg, coef, scale)` triple.

use crate::Decimal;
use core::hash::{Hash, Hasher};

/// The canonical, trailing-zero-trimmed form of a decimal's bit pattern.
fn canonical(d: &Decimal) -> (bool, u64, u8) {
    let mut coef = d.coef;
    let mut scale = d.scale;
    if coef == 0 {
        return (false, 0, 0);
    }
    while scale > 0 && coef % 10 == 0 {
        coef /= 10;
        scale -= 1;
    }
    (d.neg, coef, scale)
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (neg, coef, scale) = canonical(self);
        neg.hash(state);
        coef.hash(state);
        scale.hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn hash_of(d: &Decimal) -> u64 {
        use core::hash::BuildHasher;
        let mut h = std::collections::hash_map::RandomState::new().build_hasher();
        d.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        let a = Decimal::must_new(100, 2); // 1.00
        let b = Decimal::must_new(1, 0); // 1
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn zero_representations_hash_equal() {
        let a = Decimal::must_new(0, 5);
        let b = Decimal::ZERO;
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
