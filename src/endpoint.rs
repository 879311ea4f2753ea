/*!
The endpoint converter.

Converts a user-supplied interval endpoint (a finite `f64` or a
rational-literal string) to the `f64` that [`crate::Interval`]
stores, under an explicitly requested rounding direction.
*/

use rug::Integer;

use crate::error::{Error, Result};
use crate::rational::{self, Fraction};
use crate::round::{self, Mode};

/// A raw, not-yet-converted interval endpoint.
///
/// Owns its string payload rather than borrowing it so that callers
/// (see [`crate::interval::IntoEndpoint`]) can build one from a `&str`
/// argument without threading a lifetime parameter through
/// [`crate::Interval`]'s public constructors.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Endpoint {
    Float(f64),
    Str(String),
}

/// Converts one raw endpoint to `f64`, rounding a string literal
/// toward `direction`. Numeric inputs of exact binary representation
/// pass through unchanged in every rounding mode.
pub(crate) fn convert(endpoint: &Endpoint, direction: Mode) -> Result<f64> {
    match endpoint {
        Endpoint::Float(x) => Ok(*x),
        Endpoint::Str(s) => {
            let fraction = rational::parse(Some(s))?;
            let (num, den) = fraction_to_f64_pair(&fraction)?;
            Ok(round::with_mode(direction, || num / den))
        }
    }
}

/// Converts a fraction's numerator and denominator to `f64` using
/// round-to-nearest, the first phase of the two-phase scheme in
/// `convert`: both endpoints of a future interval built from the same
/// literal then divide the same pair of operands, each under its own
/// directed mode.
fn fraction_to_f64_pair(fraction: &Fraction) -> Result<(f64, f64)> {
    let (num, den) = round::with_mode(Mode::ToNearest, || {
        (to_f64(&fraction.num), to_f64(&fraction.den))
    });
    if !num.is_finite() || !den.is_finite() {
        return Err(Error::Overflow);
    }
    Ok((num, den))
}

fn to_f64(n: &Integer) -> f64 {
    // `Integer::to_f64` rounds to nearest and saturates to +/-infinity
    // when the value is too large to represent, which is exactly the
    // overflow condition checked by the caller.
    n.to_f64()
}

/// Constructs the two `f64` endpoints of an interval from a pair of raw
/// bounds, applying `TowardNegative` to the lower slot and
/// `TowardPositive` to the upper slot.
///
/// When both raw inputs are the *same* rational-literal string, the
/// string is parsed and its numerator/denominator converted to `f64`
/// only once; the division is still performed twice, each under its
/// own direction, so the two endpoints can legitimately differ (e.g.
/// `"0.1"` does not have an exact binary representation) even though
/// they were built from identical input.
pub(crate) fn convert_bounds(a: &Endpoint, b: &Endpoint) -> Result<(f64, f64)> {
    if let (Endpoint::Str(sa), Endpoint::Str(sb)) = (a, b) {
        if sa == sb {
            let fraction = rational::parse(Some(sa))?;
            let (num, den) = fraction_to_f64_pair(&fraction)?;
            let lo = round::with_mode(Mode::TowardNegative, || num / den);
            let hi = round::with_mode(Mode::TowardPositive, || num / den);
            return Ok((lo, hi));
        }
    }
    let lo = convert(a, Mode::TowardNegative)?;
    let hi = convert(b, Mode::TowardPositive)?;
    Ok((lo, hi))
}
