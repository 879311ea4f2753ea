/*!
The directed-rounding transcendental function contract.

This crate's core does not implement a correctly-rounded transcendental
library; [`DirectedTranscendental`] only declares the interface such a
library must expose to plug into [`crate::Interval`] arithmetic. Each
method takes an already-rounded `f64` and a requested [`Mode`][crate::round::Mode],
and must round its result to that direction to the unit in the last
place. No implementation ships here.
*/

use crate::error::Result;
use crate::round::Mode;

/// A suite of elementary transcendental functions, each correctly
/// rounded in a caller-chosen direction.
///
/// Left unimplemented: a reimplementation may adopt an external
/// correctly-rounded library, or omit this subsystem entirely, without
/// affecting the arithmetic/set/ordering/metric core.
pub trait DirectedTranscendental {
    fn acos(x: f64, direction: Mode) -> Result<f64>;
    fn acosh(x: f64, direction: Mode) -> Result<f64>;
    fn asin(x: f64, direction: Mode) -> Result<f64>;
    fn asinh(x: f64, direction: Mode) -> Result<f64>;
    fn atan(x: f64, direction: Mode) -> Result<f64>;
    fn atanh(x: f64, direction: Mode) -> Result<f64>;
    fn cos(x: f64, direction: Mode) -> Result<f64>;
    fn cosh(x: f64, direction: Mode) -> Result<f64>;
    fn cot(x: f64, direction: Mode) -> Result<f64>;
    fn csc(x: f64, direction: Mode) -> Result<f64>;
    fn exp(x: f64, direction: Mode) -> Result<f64>;
    /// `log` base `base` (default base `2` upstream; callers choose
    /// explicitly here since Rust has no default-argument sugar).
    fn log(x: f64, direction: Mode, base: f64) -> Result<f64>;
    fn pow(x: f64, y: f64, direction: Mode) -> Result<f64>;
    fn sec(x: f64, direction: Mode) -> Result<f64>;
    fn sin(x: f64, direction: Mode) -> Result<f64>;
    fn sinh(x: f64, direction: Mode) -> Result<f64>;
    fn sqrt(x: f64, direction: Mode) -> Result<f64>;
    fn tan(x: f64, direction: Mode) -> Result<f64>;
    fn tanh(x: f64, direction: Mode) -> Result<f64>;
}
