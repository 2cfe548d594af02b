//! Variadic aggregates: `Sum`, `Prod`, `Mean`.
//!
//! Each accumulates in `crate::arith`'s wide layer and narrows exactly
//! once, so summing (or multiplying) many inputs costs one rounding, not
//! one per term.

use crate::arith;
use crate::{Decimal, Result};

impl Decimal {
    /// The sum of `xs`, accumulated in wide arithmetic with a single
    /// final narrow. `Decimal::sum(&[])` is [`Decimal::ZERO`].
    pub fn sum(xs: &[Decimal]) -> Result<Decimal> {
        arith::sum_many(xs)
    }

    /// The product of `xs`, accumulated in wide arithmetic with a single
    /// final narrow. `Decimal::prod(&[])` is [`Decimal::ONE`].
    pub fn prod(xs: &[Decimal]) -> Result<Decimal> {
        arith::prod_many(xs)
    }

    /// The arithmetic mean of `xs`: `Sum(xs) / xs.len()`.
    /// `Decimal::mean(&[])` is [`Decimal::ZERO`] (matching `Sum` on an
    /// empty input, rather than dividing zero by zero).
    pub fn mean(xs: &[Decimal]) -> Result<Decimal> {
        if xs.is_empty() {
            return Ok(Decimal::ZERO);
        }
        let total = arith::sum_many(xs)?;
        total.checked_div(Decimal::from_int(xs.len() as i64))
    }
}
