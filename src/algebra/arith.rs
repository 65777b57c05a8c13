//! Arithmetic on semi-structured complex numbers.
//!
//! Addition and subtraction are component-wise. Multiplication goes through
//! two polar pairs: the `(A, B)` pair carries the complex part of the
//! product, the `(C, D)` pair carries the unstructured part, and the result
//! is rebuilt from the phase difference of the two.
//!
//! Division multiplies by the inverse of the divisor. The two division
//! variants differ only when the divisor is exactly zero.

use std::f64::consts::{FRAC_PI_2, PI};
use thiserror::Error;
use crate::algebra::Triple;

/// Division by the zero triple `(0, 0, 0)` under the standard policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot divide by zero")]
pub struct DivideByZero;

/// Add two triples: `(x + a, y + b, z + c)`.
#[inline]
pub fn add(p: Triple, q: Triple) -> Triple {
    Triple::new(p.x + q.x, p.y + q.y, p.z + q.z)
}

/// Subtract `q` from `p`: `(x - a, y - b, z - c)`.
#[inline]
pub fn subtract(p: Triple, q: Triple) -> Triple {
    Triple::new(p.x - q.x, p.y - q.y, p.z - q.z)
}

/// Phase of a polar pair.
///
/// Degenerate pairs do not use `atan2`: `(0, 0)` has phase π and
/// `(0, v)` has phase π/2 for any non-zero `v`, including negative ones.
#[inline]
pub fn polar_angle(re: f64, im: f64) -> f64 {
    if re == 0.0 && im == 0.0 {
        PI
    } else if re == 0.0 {
        FRAC_PI_2
    } else {
        im.atan2(re)
    }
}

/// Multiply two triples.
///
/// With `p = (x, y, z)` and `q = (a, b, c)`:
/// - `A = xa - yb - zc`, `B = xb + ya`
/// - `C = xc + za`, `D = yc + zb`
/// - `F = angle(A, B)`, `G = angle(C, D)` (see [`polar_angle`])
/// - result `= (|AB|·cos(F - G), |AB|·sin(F - G), |CD|)`
///
/// Not commutative in general, and `(1, 0, 0)` is not an identity: the
/// degenerate phase of a zero `(C, D)` pair rotates the result by π.
pub fn multiply(p: Triple, q: Triple) -> Triple {
    let (x, y, z) = (p.x, p.y, p.z);
    let (a, b, c) = (q.x, q.y, q.z);

    let big_a = x * a - y * b - z * c;
    let big_b = x * b + y * a;
    let big_c = x * c + z * a;
    let big_d = y * c + z * b;

    let f = polar_angle(big_a, big_b);
    let g = polar_angle(big_c, big_d);

    let mag1 = (big_a * big_a + big_b * big_b).sqrt();
    let mag2 = (big_c * big_c + big_d * big_d).sqrt();

    Triple::new(mag1 * (f - g).cos(), mag1 * (f - g).sin(), mag2)
}

/// Inverse of a non-zero triple: `(R·a, -R·b, -R·c)` with `R = 1 / (a² + b² + c²)`.
pub fn inverse(q: Triple) -> Result<Triple, DivideByZero> {
    if q.is_zero() {
        return Err(DivideByZero);
    }
    Ok(unchecked_inverse(q))
}

#[inline]
fn unchecked_inverse(q: Triple) -> Triple {
    let r = 1.0 / (q.x * q.x + q.y * q.y + q.z * q.z);
    Triple::new(r * q.x, -r * q.y, -r * q.z)
}

/// Standard division: fails when `q` is exactly zero.
pub fn divide_std(p: Triple, q: Triple) -> Result<Triple, DivideByZero> {
    let inv = inverse(q)?;
    Ok(multiply(p, inv))
}

/// Totalized division: a zero divisor is replaced by the unstructured unit `p`.
pub fn divide_dbz(p: Triple, q: Triple) -> Triple {
    let divisor = if q.is_zero() { Triple::UNSTRUCTURED_UNIT } else { q };
    multiply(p, unchecked_inverse(divisor))
}
