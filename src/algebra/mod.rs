//! Semi-structured complex number algebra.
//!
//! This module provides:
//! - [`Triple`] - A number `x + yi + zp` stored as `(x, y, z)`
//! - [`arith`] - Addition, subtraction, multiplication and the two division variants

mod triple;
pub mod arith;

pub use triple::{Triple, TripleParseError, format_component};
pub use arith::{add, subtract, multiply, inverse, divide_std, divide_dbz, polar_angle, DivideByZero};
