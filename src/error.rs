// ireal: real interval arithmetic with maximum accuracy
// 2024

// error.rs
//
// The error surface of the crate.

use std::fmt::{self, Display, Formatter};

/// Everything that can go wrong while parsing a rational literal or
/// operating on an [`crate::Interval`].
///
/// All variants are unit variants; the names themselves carry the
/// semantics, matching the failure conditions a caller needs to branch
/// on rather than a message to display (`Display` supplies the message).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input string does not match the rational-literal grammar.
    InvalidRational,
    /// A denominator sub-expression reduced to `0/x`.
    DivisionByZero,
    /// A fraction numerator or denominator is too large to convert to
    /// a finite `f64`.
    Overflow,
    /// The operation is not defined when an operand is the empty
    /// interval.
    EmptyInterval,
    /// The operation is not defined when an operand is the undefined
    /// interval.
    UndefinedInterval,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::InvalidRational => f.write_str("the input string is not a valid rational number"),
            Error::DivisionByZero => f.write_str("there's a zero in the denominators"),
            Error::Overflow => f.write_str("fraction numerator or denominator is too large to convert to a finite float"),
            Error::EmptyInterval => f.write_str("operation not defined for empty intervals"),
            Error::UndefinedInterval => f.write_str("operation not defined for undefined intervals"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
