// rational/fraction.rs
//
// An exact fraction of arbitrary-precision integers.

use num_traits::Zero;
use rug::Integer;
use std::cmp::Ordering;

use crate::error::{Error, Result};

/// A reduced fraction `numerator / denominator` with `denominator > 0`
/// and `gcd(|numerator|, denominator) == 1`.
///
/// Arbitrary-precision integers are required here because the rational
/// grammar admits arbitrary exponents (`1e1000000` is a valid literal);
/// overflow is only detected one layer up, when the fraction is
/// converted to `f64` in [`crate::endpoint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Fraction {
    pub num: Integer,
    pub den: Integer,
}

impl Fraction {
    /// The fraction `1/1`, used when an input is absent.
    pub fn one() -> Self {
        Fraction {
            num: Integer::from(1),
            den: Integer::from(1),
        }
    }

    /// Builds a reduced fraction from an arbitrary (possibly negative
    /// denominator, possibly unreduced) numerator/denominator pair.
    pub fn new(num: Integer, den: Integer) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }

        // canonicalize the sign onto the numerator so `den > 0`
        let (num, den) = if den.cmp0() == Ordering::Less {
            (-num, -den)
        } else {
            (num, den)
        };

        if num.is_zero() {
            return Ok(Fraction {
                num,
                den: Integer::from(1),
            });
        }

        let gcd = Integer::from(num.gcd_ref(&den));
        let num = Integer::from(&num / &gcd);
        let den = Integer::from(&den / &gcd);
        Ok(Fraction { num, den })
    }

    /// Combines `self / other` (used for the grammar's recursive
    /// `a/denominator` suffix: division by the parsed denominator
    /// sub-expression is multiplication by its reciprocal).
    pub fn div(self, other: Fraction) -> Result<Self> {
        let num = Integer::from(&self.num * &other.den);
        let den = Integer::from(&self.den * &other.num);
        Fraction::new(num, den)
    }
}
