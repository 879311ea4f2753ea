// ireal: real interval arithmetic with maximum accuracy
// 2024

// interval.rs
//
// Tests for the interval algebra and the mode-preservation contract
// that spans all of it. Rational-literal parsing itself is covered in
// rational.rs.

use ireal::error::Error;
use ireal::round::get_mode;
use ireal::Interval;

// --- construction (scenarios 6, 7) ---

#[test]
fn of_bounds_mixes_literal_and_scientific_notation() {
    let iv = Interval::of_bounds("25/10", "1E1").unwrap();
    assert_eq!(iv.inf(), Some(2.5));
    assert_eq!(iv.sup(), Some(10.0));
    assert_eq!(iv.to_string(), "[2.5, 10.0]");
}

#[test]
fn of_bounds_mixes_float_and_literal() {
    let iv = Interval::of_bounds(0.5, "0.25").unwrap();
    assert_eq!(iv.inf(), Some(0.25));
    assert_eq!(iv.sup(), Some(0.5));
}

#[test]
fn of_bounds_is_commutative_in_its_arguments() {
    // Interval::of_bounds(a, b) == Interval::of_bounds(b, a)
    let a = Interval::of_bounds(1.0, 5.0).unwrap();
    let b = Interval::of_bounds(5.0, 1.0).unwrap();
    assert_eq!(a, b, "normalization must not depend on argument order");
}

// --- arithmetic (scenarios 8, 9, 10) ---

#[test]
fn addition_of_identical_literals_keeps_endpoints_distinct_but_display_equal() {
    // "0.1" + "0.1": proper, inf < sup, both print as "0.2"
    let a = Interval::of("0.1").unwrap();
    let sum = (a + a).unwrap();
    let inf = sum.inf().unwrap();
    let sup = sum.sup().unwrap();
    assert!(inf < sup, "outward rounding must not collapse the sum to a point");
    assert_eq!(format!("{:?}", inf), "0.2");
    assert_eq!(format!("{:?}", sup), "0.2");
}

#[test]
fn reciprocal_of_interval_spanning_zero_is_undefined() {
    let iv = Interval::of_bounds(-2.0, 2.0).unwrap();
    let recip = (!iv).unwrap();
    assert!(recip.is_undefined());
}

#[test]
fn multiplication_of_two_positive_intervals() {
    let a = Interval::of_bounds(0.25, 0.5).unwrap();
    let b = Interval::of_bounds(2.0, 3.0).unwrap();
    let product = (a * b).unwrap();
    assert_eq!(product.inf(), Some(0.5));
    assert_eq!(product.sup(), Some(1.5));
}

#[test]
fn arithmetic_fails_on_empty_and_propagates_undefined() {
    let proper = Interval::of(1.0).unwrap();
    assert_eq!((proper + Interval::empty()), Err(Error::EmptyInterval));

    let sum = (proper + Interval::undefined()).unwrap();
    assert!(sum.is_undefined(), "arithmetic must propagate Undefined, not fail");
}

// --- set operations (scenarios 11, 12) ---

#[test]
fn union_of_disjoint_intervals_is_undefined() {
    let a = Interval::of_bounds(-1.0, 0.0).unwrap();
    let b = Interval::of_bounds(0.25, 10.0).unwrap();
    assert!((a | b).is_undefined());
}

#[test]
fn hull_of_disjoint_intervals_is_the_enclosing_interval() {
    let a = Interval::of_bounds(-1.0, 0.0).unwrap();
    let b = Interval::of_bounds(0.25, 10.0).unwrap();
    let h = a.hull(&b);
    assert_eq!(h.inf(), Some(-1.0));
    assert_eq!(h.sup(), Some(10.0));
}

#[test]
fn intersection_and_hull_absorb_empty_operands() {
    let proper = Interval::of_bounds(1.0, 2.0).unwrap();
    assert_eq!(proper.intersection(&Interval::empty()), Interval::empty());
    assert_eq!(proper.hull(&Interval::empty()), proper);
    assert_eq!(Interval::empty().hull(&proper), proper);
}

// --- ordering (scenario 13) ---

#[test]
fn strict_less_than_holds_for_separated_intervals() {
    let a = Interval::of_bounds(2.0, 3.0).unwrap();
    let b = Interval::of(3.1).unwrap();
    assert_eq!(a.lt(&b), Ok(true));
}

#[test]
fn ordering_on_a_lone_empty_operand_raises() {
    let proper = Interval::of(1.0).unwrap();
    assert_eq!(proper.lt(&Interval::empty()), Err(Error::EmptyInterval));
    assert_eq!(proper.le(&Interval::empty()), Err(Error::EmptyInterval));
}

#[test]
fn less_equal_on_two_empties_is_true_but_less_than_still_raises() {
    // `le` carves out a both-Empty exception; `lt` does not, so it
    // raises on every Empty combination, including both sides Empty.
    assert_eq!(Interval::empty().le(&Interval::empty()), Ok(true));
    assert_eq!(Interval::empty().lt(&Interval::empty()), Err(Error::EmptyInterval));
    assert_eq!(Interval::empty().gt(&Interval::empty()), Err(Error::EmptyInterval));
}

#[test]
fn ordering_on_undefined_is_false_not_an_error() {
    let proper = Interval::of(1.0).unwrap();
    let undefined = Interval::undefined();
    assert_eq!(proper.lt(&undefined), Ok(false));
    assert_eq!(proper.le(&undefined), Ok(false));
}

// --- containment (scenario 14) ---

#[test]
fn empty_is_contained_in_every_proper_interval() {
    let iv = Interval::of(-1.0).unwrap();
    assert_eq!(iv.contains(Interval::empty()), Ok(true));
}

#[test]
fn empty_contains_only_itself() {
    assert_eq!(Interval::empty().contains(Interval::empty()), Ok(true));
    let proper = Interval::of(1.0).unwrap();
    assert_eq!(Interval::empty().contains(proper), Ok(false));
}

#[test]
fn containment_wraps_a_raw_scalar_operand() {
    let iv = Interval::of_bounds(0.0, 10.0).unwrap();
    assert_eq!(iv.contains(5.0), Ok(true));
    assert_eq!(iv.contains("20"), Ok(false));
}

// --- metrics (scenarios 15, 16) ---

#[test]
fn absolute_value_is_the_larger_endpoint_magnitude() {
    let iv = Interval::of_bounds(-1.0, 1.0).unwrap();
    assert_eq!(iv.abs(), Ok(1.0));
}

#[test]
fn hausdorff_distance_between_two_proper_intervals() {
    let a = Interval::of_bounds(-10.0, 5.0).unwrap();
    let b = Interval::of_bounds(10.0, 50.0).unwrap();
    assert_eq!(a.distance(&b), Ok(45.0));
}

#[test]
fn metrics_fail_on_empty_and_undefined() {
    let proper = Interval::of(1.0).unwrap();
    assert_eq!(Interval::empty().abs(), Err(Error::EmptyInterval));
    assert_eq!(Interval::undefined().abs(), Err(Error::UndefinedInterval));
    assert_eq!(proper.distance(&Interval::undefined()), Err(Error::UndefinedInterval));
}

// --- formatting ---

#[test]
fn display_matches_the_spec_literal_form() {
    assert_eq!(Interval::empty().to_string(), "empty interval");
    assert_eq!(Interval::undefined().to_string(), "undefined interval");
    assert_eq!(Interval::of(2.0).unwrap().to_string(), "[2.0, 2.0]");
}

// --- cross-cutting invariants (spec.md §8) ---

#[test]
fn containment_invariant_holds_for_a_sample_of_points() {
    let x = Interval::of_bounds(-1.0, 3.0).unwrap();
    let y = Interval::of_bounds(2.0, 4.0).unwrap();
    let sum = (x + y).unwrap();

    for &xv in &[-1.0, 0.0, 1.5, 3.0] {
        for &yv in &[2.0, 2.5, 4.0] {
            let point_sum = xv + yv;
            assert!(
                sum.inf().unwrap() <= point_sum && point_sum <= sum.sup().unwrap(),
                "{xv} + {yv} = {point_sum} escaped the computed sum {sum}"
            );
        }
    }
}

#[test]
fn monotonicity_of_set_ops() {
    // X ⊆ X' ∧ Y ⊆ Y' ⇒ X∩Y ⊆ X'∩Y' ∧ hull(X,Y) ⊆ hull(X',Y')
    let x = Interval::of_bounds(1.0, 2.0).unwrap();
    let x_wide = Interval::of_bounds(0.0, 3.0).unwrap();
    let y = Interval::of_bounds(1.5, 2.5).unwrap();
    let y_wide = Interval::of_bounds(-1.0, 4.0).unwrap();
    assert_eq!(x.contains(y), Ok(false)); // sanity: x, y are not themselves nested
    assert_eq!(x_wide.contains(x), Ok(true));
    assert_eq!(y_wide.contains(y), Ok(true));

    let inter = x.intersection(&y);
    let inter_wide = x_wide.intersection(&y_wide);
    assert_eq!(inter_wide.contains(inter), Ok(true));

    let hull = x.hull(&y);
    let hull_wide = x_wide.hull(&y_wide);
    assert_eq!(hull_wide.contains(hull), Ok(true));
}

#[test]
fn algebraic_identities() {
    let x = Interval::of_bounds(-2.0, 3.0).unwrap();

    let plus_zero = (x + 0.0).unwrap();
    assert_eq!(plus_zero, x, "X + 0 = X");

    let self_diff = (x - x).unwrap();
    assert!(self_diff.contains(0.0) == Ok(true), "X - X must contain 0");

    assert_eq!(x.hull(&x), x, "hull(X, X) = X");
    assert_eq!(x.intersection(&x), x, "X ∩ X = X");
}

#[test]
fn mode_is_preserved_across_every_public_operation() {
    let before = get_mode();

    let _ = Interval::of("0.1");
    let _ = Interval::of("not a number");
    let a = Interval::of_bounds(-1.0, 2.0).unwrap();
    let b = Interval::of(3.0).unwrap();
    let _ = a + b;
    let _ = a * b;
    let _ = a / Interval::of(0.0).unwrap();
    let _ = !a;
    let _ = a.abs();
    let _ = Interval::empty().abs();
    let _ = a.lt(&b);
    let _ = a.contains(b);

    assert_eq!(get_mode(), before, "no public operation may leak a rounding mode change");
}
