// interval/arith.rs
//
// Unary and binary arithmetic on intervals (spec.md §4.4 "Arithmetic").
//
// Every binary operator is also implemented for each scalar/string type
// accepted by `IntoEndpoint`, wrapping the non-`Interval` operand via
// `Interval::of` first, per "Mixing non-Interval operands" above.
// The generating macro mirrors the style of the teacher crate's
// `rounded_1ary!`/`rounded_2ary!` macros in its own `ops.rs`, reused
// here for operator overloading instead of rounded-math traits.

use std::ops::{Add, Div, Mul, Neg, Not, Sub};

use crate::error::{Error, Result};
use crate::round::{self, Mode};

use super::Interval;

impl Interval {
    /// Unpacks a `Proper` interval's bounds. Callers must have already
    /// ruled out `Empty`/`Undefined`.
    pub(super) fn proper_bounds(&self) -> (f64, f64) {
        match self {
            Interval::Proper { inf, sup } => (*inf, *sup),
            _ => unreachable!("proper_bounds called on a non-Proper interval"),
        }
    }

    /// Unary plus: identity on everything but `Empty`.
    pub fn pos(&self) -> Result<Interval> {
        if self.is_empty() {
            return Err(Error::EmptyInterval);
        }
        Ok(*self)
    }

    /// The reciprocal `1/X`. `Undefined` if `0` lies in `X`; propagates
    /// an already-`Undefined` operand.
    pub fn recip(&self) -> Result<Interval> {
        if self.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() {
            return Ok(Interval::Undefined);
        }
        let (x, y) = self.proper_bounds();
        if x <= 0.0 && 0.0 <= y {
            return Ok(Interval::Undefined);
        }
        let inf = round::with_mode(Mode::TowardNegative, || 1.0 / y);
        let sup = round::with_mode(Mode::TowardPositive, || 1.0 / x);
        Ok(Interval::from_computed_bounds(inf, sup))
    }

    fn checked_add(self, other: &Interval) -> Result<Interval> {
        if self.is_empty() || other.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() || other.is_undefined() {
            return Ok(Interval::Undefined);
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        let inf = round::with_mode(Mode::TowardNegative, || x1 + x2);
        let sup = round::with_mode(Mode::TowardPositive, || y1 + y2);
        Ok(Interval::from_computed_bounds(inf, sup))
    }

    fn checked_sub(self, other: &Interval) -> Result<Interval> {
        if self.is_empty() || other.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() || other.is_undefined() {
            return Ok(Interval::Undefined);
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        let inf = round::with_mode(Mode::TowardNegative, || x1 - y2);
        let sup = round::with_mode(Mode::TowardPositive, || y1 - x2);
        Ok(Interval::from_computed_bounds(inf, sup))
    }

    fn checked_mul(self, other: &Interval) -> Result<Interval> {
        if self.is_empty() || other.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() || other.is_undefined() {
            return Ok(Interval::Undefined);
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        // all four cross products are recomputed under each direction;
        // the paired-rounding cost is accepted for correctness.
        let inf = round::with_mode(Mode::TowardNegative, || {
            [x1 * x2, x1 * y2, y1 * x2, y1 * y2]
                .into_iter()
                .fold(f64::INFINITY, f64::min)
        });
        let sup = round::with_mode(Mode::TowardPositive, || {
            [x1 * x2, x1 * y2, y1 * x2, y1 * y2]
                .into_iter()
                .fold(f64::NEG_INFINITY, f64::max)
        });
        Ok(Interval::from_computed_bounds(inf, sup))
    }

    fn checked_div(self, other: &Interval) -> Result<Interval> {
        if self.is_empty() || other.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() || other.is_undefined() {
            return Ok(Interval::Undefined);
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        if x2 <= 0.0 && 0.0 <= y2 {
            return Ok(Interval::Undefined);
        }
        let inf = round::with_mode(Mode::TowardNegative, || {
            [x1 / x2, x1 / y2, y1 / x2, y1 / y2]
                .into_iter()
                .fold(f64::INFINITY, f64::min)
        });
        let sup = round::with_mode(Mode::TowardPositive, || {
            [x1 / x2, x1 / y2, y1 / x2, y1 / y2]
                .into_iter()
                .fold(f64::NEG_INFINITY, f64::max)
        });
        Ok(Interval::from_computed_bounds(inf, sup))
    }
}

impl Neg for Interval {
    type Output = Result<Interval>;

    /// `[-sup, -inf]`; sign-flipping endpoints is exact, no directed
    /// rounding needed.
    fn neg(self) -> Self::Output {
        if self.is_empty() {
            return Err(Error::EmptyInterval);
        }
        if self.is_undefined() {
            return Ok(Interval::Undefined);
        }
        let (x, y) = self.proper_bounds();
        Ok(Interval::Proper { inf: -y, sup: -x })
    }
}

impl Not for Interval {
    type Output = Result<Interval>;

    /// Stands in for the spec's unary `~` (reciprocal); Rust has no
    /// custom prefix operator, and `Not` is otherwise unused here.
    fn not(self) -> Self::Output {
        self.recip()
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $core:ident) => {
        impl $trait<Interval> for Interval {
            type Output = Result<Interval>;
            fn $method(self, rhs: Interval) -> Self::Output {
                self.$core(&rhs)
            }
        }
        impl $trait<f64> for Interval {
            type Output = Result<Interval>;
            fn $method(self, rhs: f64) -> Self::Output {
                let rhs = Interval::of(rhs)?;
                self.$core(&rhs)
            }
        }
        impl $trait<i32> for Interval {
            type Output = Result<Interval>;
            fn $method(self, rhs: i32) -> Self::Output {
                let rhs = Interval::of(rhs)?;
                self.$core(&rhs)
            }
        }
        impl $trait<i64> for Interval {
            type Output = Result<Interval>;
            fn $method(self, rhs: i64) -> Self::Output {
                let rhs = Interval::of(rhs)?;
                self.$core(&rhs)
            }
        }
        impl $trait<&str> for Interval {
            type Output = Result<Interval>;
            fn $method(self, rhs: &str) -> Self::Output {
                let rhs = Interval::of(rhs)?;
                self.$core(&rhs)
            }
        }
        impl $trait<String> for Interval {
            type Output = Result<Interval>;
            fn $method(self, rhs: String) -> Self::Output {
                let rhs = Interval::of(rhs)?;
                self.$core(&rhs)
            }
        }
    };
}

impl_binop!(Add, add, checked_add);
impl_binop!(Sub, sub, checked_sub);
impl_binop!(Mul, mul, checked_mul);
impl_binop!(Div, div, checked_div);
