// interval/order.rs
//
// Ordering (`<`, `<=`, `>`, `>=`) and containment (`∈`).
//
// These are plain methods rather than a `PartialOrd`/`Ord` impl:
// `<`/`<=` are fallible (a lone Empty operand raises) and `Undefined`
// makes them return `false` rather than propagate, an asymmetry that
// `PartialOrd::partial_cmp` cannot express.

use super::{Interval, IntoEndpoint};
use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
}

/// Converts `self` or a raw endpoint into the `Interval` operand a
/// relational or containment check compares against, per "wrapping
/// non-`Interval` operands" at the interval-algebra boundary.
pub trait IntoOperand: sealed::Sealed {
    #[doc(hidden)]
    fn into_operand(self) -> Result<Interval>;
}

impl sealed::Sealed for Interval {}
impl IntoOperand for Interval {
    fn into_operand(self) -> Result<Interval> {
        Ok(self)
    }
}

impl<T: IntoEndpoint> sealed::Sealed for T {}
impl<T: IntoEndpoint> IntoOperand for T {
    fn into_operand(self) -> Result<Interval> {
        Interval::of(self)
    }
}

impl Interval {
    /// `self < other`: strict separation, `y1 < x2`.
    ///
    /// Any `Empty` operand raises, including when both are Empty; `le`
    /// is the only relation that carves out a both-Empty exception. An
    /// `Undefined` operand (with no Empty present) makes the comparison
    /// `false` rather than raising.
    pub fn lt(&self, other: &Interval) -> Result<bool> {
        if self.is_empty() || other.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() || other.is_undefined() {
            return Ok(false);
        }
        let (_, y1) = self.proper_bounds();
        let (x2, _) = other.proper_bounds();
        Ok(y1 < x2)
    }

    /// `self <= other`: `x1 <= x2 AND y1 <= y2`.
    ///
    /// Two `Empty` operands compare `true` (the one case the open
    /// question in the design notes carves out); a lone `Empty`
    /// operand still raises.
    pub fn le(&self, other: &Interval) -> Result<bool> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ok(true),
            (true, false) | (false, true) => return Err(Error::EmptyInterval),
            _ => {}
        }
        if self.is_undefined() || other.is_undefined() {
            return Ok(false);
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        Ok(x1 <= x2 && y1 <= y2)
    }

    /// `self > other`, the symmetric reflection of `lt`.
    pub fn gt(&self, other: &Interval) -> Result<bool> {
        other.lt(self)
    }

    /// `self >= other`, the symmetric reflection of `le`.
    pub fn ge(&self, other: &Interval) -> Result<bool> {
        other.le(self)
    }

    /// `other ∈ self`, after wrapping a non-`Interval` `other` via
    /// `Interval::of`.
    ///
    /// Never raises except when wrapping `other` fails (e.g. an
    /// invalid rational-literal string).
    pub fn contains<T: IntoOperand>(&self, other: T) -> Result<bool> {
        let other = other.into_operand()?;
        if self.is_undefined() || other.is_undefined() {
            return Ok(false);
        }
        if self.is_empty() && !other.is_empty() {
            return Ok(false);
        }
        if other.is_empty() {
            return Ok(true);
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        Ok(x1 <= x2 && y1 >= y2)
    }
}
