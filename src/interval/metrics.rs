// interval/metrics.rs
//
// Scalar quantities derived from one or two intervals (spec.md §4.4
// "Metrics"). Unlike the general state table, these fail with
// `UndefinedInterval` rather than propagating Undefined: there is no
// scalar "undefined" to hand back.

use crate::error::{Error, Result};
use crate::round::{self, Mode};

use super::Interval;

impl Interval {
    /// `|X|`, the largest magnitude among the endpoints, rounded up.
    pub fn abs(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() {
            return Err(Error::UndefinedInterval);
        }
        let (x, y) = self.proper_bounds();
        Ok(round::with_mode(Mode::TowardPositive, || x.abs().max(y.abs())))
    }

    /// `sup - inf`, rounded up.
    pub fn diameter(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() {
            return Err(Error::UndefinedInterval);
        }
        let (x, y) = self.proper_bounds();
        Ok(round::with_mode(Mode::TowardPositive, || y - x))
    }

    /// `(inf + sup) / 2`, rounded up.
    pub fn middle(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() {
            return Err(Error::UndefinedInterval);
        }
        let (x, y) = self.proper_bounds();
        Ok(round::with_mode(Mode::TowardPositive, || (x + y) / 2.0))
    }

    /// The Hausdorff distance between `self` and `other`, rounded up.
    pub fn distance(&self, other: &Interval) -> Result<f64> {
        if self.is_empty() || other.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() || other.is_undefined() {
            return Err(Error::UndefinedInterval);
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        Ok(round::with_mode(Mode::TowardPositive, || {
            (x1 - x2).abs().max((y1 - y2).abs())
        }))
    }
}
