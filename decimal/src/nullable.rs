//! [`NullDecimal`]: a [`Decimal`] plus a validity flag, for SQL `NULL` and
//! its JSON equivalent. When `valid` is `false`, `value` is always the
//! canonical zero -- there is exactly one representation of "absent".

use crate::{Decimal, Error, Result};
use alloc::string::String;
use core::fmt;

/// A nullable decimal: `value` is meaningful only when `valid` is `true`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct NullDecimal {
    value: Decimal,
    valid: bool,
}

impl NullDecimal {
    /// A non-null wrapper around `value`.
    pub fn some(value: Decimal) -> Self {
        NullDecimal { value, valid: true }
    }

    /// The null value: `valid = false`, `value = Decimal::ZERO`.
    pub const NULL: NullDecimal = NullDecimal { value: Decimal::ZERO, valid: false };

    /// `true` iff this wraps a present value.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The wrapped value, or `None` if null.
    pub fn value(&self) -> Option<Decimal> {
        self.valid.then_some(self.value)
    }

    /// The wrapped value, failing with [`Error::NullValue`] if null --
    /// for callers at a non-nullable boundary that must reject NULL.
    pub fn require(&self) -> Result<Decimal> {
        if self.valid {
            Ok(self.value)
        } else {
            Err(Error::NullValue)
        }
    }

    /// Parses either the literal sentinel `"null"` (case-sensitive, the
    /// same token this type's [`fmt::Display`] emits) into
    /// [`NullDecimal::NULL`], or a canonical decimal string into
    /// `NullDecimal::some(..)`.
    pub fn decode_text(s: &str) -> Result<Self> {
        if s == "null" {
            Ok(NullDecimal::NULL)
        } else {
            Ok(NullDecimal::some(s.parse()?))
        }
    }

    /// The canonical decimal string, or `None` when `valid` is `false` --
    /// a SQL driver binds `None` to a NULL parameter rather than any text.
    pub fn encode_text(&self) -> Option<String> {
        self.value().map(Decimal::encode_text)
    }
}

impl From<Decimal> for NullDecimal {
    fn from(value: Decimal) -> Self {
        NullDecimal::some(value)
    }
}

/// Renders the `"null"` sentinel (for tracing/debugging) when invalid,
/// or the wrapped value's canonical string otherwise. Collaborator wire
/// formats (SQL NULL, JSON `null`) are encoded by the boundary layer that
/// owns those formats, not by this `Display` impl.
impl fmt::Display for NullDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}", self.value)
        } else {
            f.write_str("<null>")
        }
    }
}
