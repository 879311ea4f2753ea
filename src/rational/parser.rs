// rational/parser.rs
//
// Recursive-descent parser for the rational-literal grammar:
//
//   rational    := sign? digits ([.,] digits?)? ([eE] sign? digits)? (/ rational)?
//   sign        := "+" | "-"
//   digits      := one or more decimal digits
//
// Written by hand over `&str` rather than with a regex engine, in
// keeping with how the rest of the retrieved numeric-crate corpus
// parses literals this small (see `dashu-rational`'s `parse.rs`).

use rug::Integer;

use crate::error::{Error, Result};
use crate::rational::Fraction;

/// Parses an optional rational-literal string into a fraction.
/// `None` (the grammar's "absent input") yields `1/1`.
pub(crate) fn parse(input: Option<&str>) -> Result<Fraction> {
    match input {
        None => Ok(Fraction::one()),
        Some(s) => parse_rational(s),
    }
}

/// Parses the full recursive grammar: a numeric part, optionally
/// followed by `/` and another rational (itself parsed recursively,
/// so `a/b/c` means `a / (b/c)`).
fn parse_rational(s: &str) -> Result<Fraction> {
    let (main, denom) = match s.find('/') {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let (n, e) = parse_numeric(main)?;
    let base = if e >= 0 {
        let scaled = Integer::from(&n * &pow10(e as u32));
        Fraction::new(scaled, Integer::from(1))?
    } else {
        Fraction::new(n, pow10((-e) as u32))?
    };

    match denom {
        None => Ok(base),
        Some(d) => base.div(parse_rational(d)?),
    }
}

/// Parses the non-recursive numeric part of the grammar (everything up
/// to, but not including, a `/denominator` suffix) and returns
/// `(n, e)` such that the represented value is `n * 10^e`, per the
/// algorithm: `n = ±(before_point * 10^k + after_point)`,
/// `e = ±exponent - k` where `k` is the number of digits after the
/// point.
fn parse_numeric(s: &str) -> Result<(Integer, i64)> {
    let bytes = s.as_bytes();
    let mut pos = 0usize;

    let negative = match bytes.first() {
        Some(b'+') => {
            pos += 1;
            false
        }
        Some(b'-') => {
            pos += 1;
            true
        }
        _ => false,
    };

    let before_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    if pos == before_start {
        return Err(Error::InvalidRational);
    }
    let before_point = &s[before_start..pos];

    let mut after_point = "";
    if matches!(bytes.get(pos), Some(b'.') | Some(b',')) {
        pos += 1;
        let after_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        after_point = &s[after_start..pos];
    }

    let mut exponent: i64 = 0;
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        pos += 1;
        let exponent_negative = match bytes.get(pos) {
            Some(b'+') => {
                pos += 1;
                false
            }
            Some(b'-') => {
                pos += 1;
                true
            }
            _ => false,
        };
        let exp_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        if pos == exp_start {
            return Err(Error::InvalidRational);
        }
        exponent = s[exp_start..pos].parse().map_err(|_| Error::InvalidRational)?;
        if exponent_negative {
            exponent = -exponent;
        }
    }

    // the whole numeric part must be consumed; anything left over
    // (including a malformed point/exponent) fails the grammar
    if pos != bytes.len() {
        return Err(Error::InvalidRational);
    }

    let mut digits = String::with_capacity(before_point.len() + after_point.len());
    digits.push_str(before_point);
    digits.push_str(after_point);
    let mut n = Integer::from_str_radix(&digits, 10).expect("validated decimal digit string");
    if negative {
        n = -n;
    }

    let e = exponent - after_point.len() as i64;
    Ok((n, e))
}

/// Computes `10^k` as an arbitrary-precision integer.
fn pow10(k: u32) -> Integer {
    let mut result = Integer::from(1);
    for _ in 0..k {
        result *= 10;
    }
    result
}
