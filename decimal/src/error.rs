use thiserror::Error;

/// Decimal arithmetic error.
///
/// Every fallible operation in this crate returns one of these kinds; the
/// crate never panics, logs, or retries on the caller's behalf.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input text does not match the decimal grammar.
    #[error("invalid decimal syntax")]
    InvalidSyntax,
    /// A constructor was given a scale outside `[0, MaxScale]`.
    #[error("scale out of range [0, {}]", crate::MAX_SCALE)]
    InvalidScale,
    /// The coefficient magnitude exceeds `MaxCoef`. Most commonly raised
    /// after rounding, when an arithmetic result still has too many
    /// digits once the target scale is fixed, but the same kind also
    /// covers a raw out-of-range coefficient handed directly to
    /// [`crate::Decimal::new`] -- there is no separate "input too large"
    /// kind, since both are the identical condition (`|coef| > MaxCoef`)
    /// just detected at a different point.
    #[error("decimal overflow")]
    Overflow,
    /// The result magnitude is smaller than the smallest representable
    /// non-zero value at the target scale.
    #[error("decimal underflow")]
    Underflow,
    /// `Quo`/`QuoRem`/`PowInt` was given a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Domain violation, e.g. `Log`/`Sqrt` of a non-positive value, or
    /// `Pow(0, 0)`.
    #[error("undefined result")]
    Undefined,
    /// An integer conversion was attempted on a non-integer decimal.
    #[error("decimal has a fractional part")]
    NonInteger,
    /// A non-nullable decode encountered a SQL/JSON NULL.
    #[error("unexpected null value")]
    NullValue,
}

/// Decimal arithmetic result.
pub type Result<T> = core::result::Result<T, Error>;
