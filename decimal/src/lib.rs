#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![forbid(missing_docs)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod aggregate;
mod arith;
mod comparison;
mod convert;
mod decimal;
mod error;
mod format;
mod hashing;
mod narrow;
mod nullable;
mod operators;
mod parse;
mod rounding;
mod transcendental;
mod wide;

#[cfg(feature = "serde")]
mod serde_impl;

pub use decimal::{Decimal, MAX_COEF, MAX_PREC, MAX_SCALE};
pub use error::{Error, Result};
pub use nullable::NullDecimal;
pub use rounding::RoundingMode;
