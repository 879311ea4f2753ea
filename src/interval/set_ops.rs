// interval/set_ops.rs
//
// Intersection, union and hull (spec.md §4.4 "Set operations"). Unlike
// arithmetic, these never fail: an Empty operand is absorbed rather
// than rejected, and endpoints combine by plain min/max, so no
// directed-rounding region is needed here.

use std::ops::{BitAnd, BitOr};

use super::Interval;

impl Interval {
    /// `self ∩ other`. An Empty operand yields Empty, unless the other
    /// operand is Undefined, in which case the result is Undefined.
    pub fn intersection(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return if self.is_undefined() || other.is_undefined() {
                Interval::Undefined
            } else {
                Interval::Empty
            };
        }
        if self.is_undefined() || other.is_undefined() {
            return Interval::Undefined;
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        let lo = x1.max(x2);
        let hi = y1.min(y2);
        if lo <= hi {
            Interval::Proper { inf: lo, sup: hi }
        } else {
            Interval::Empty
        }
    }

    /// `self ∪ other`. Reports Undefined when the operands are disjoint
    /// with a genuine gap, since a disjoint union is not a closed
    /// interval.
    pub fn union(&self, other: &Interval) -> Interval {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        if self.is_undefined() || other.is_undefined() {
            return Interval::Undefined;
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        let lo = x1.max(x2);
        let hi = y1.min(y2);
        if lo > hi {
            Interval::Undefined
        } else {
            Interval::Proper {
                inf: x1.min(x2),
                sup: y1.max(y2),
            }
        }
    }

    /// The convex hull: the smallest Proper interval enclosing both
    /// operands. Unlike `union`, always defined for two Proper
    /// operands; it never reports a gap.
    pub fn hull(&self, other: &Interval) -> Interval {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        if self.is_undefined() || other.is_undefined() {
            return Interval::Undefined;
        }
        let (x1, y1) = self.proper_bounds();
        let (x2, y2) = other.proper_bounds();
        Interval::Proper {
            inf: x1.min(x2),
            sup: y1.max(y2),
        }
    }
}

impl BitAnd for Interval {
    type Output = Interval;
    fn bitand(self, rhs: Interval) -> Interval {
        self.intersection(&rhs)
    }
}

impl BitOr for Interval {
    type Output = Interval;
    fn bitor(self, rhs: Interval) -> Interval {
        self.union(&rhs)
    }
}
