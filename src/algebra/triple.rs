//! The semi-structured complex number value type.
//!
//! A number `h = x + yi + zp` is stored as the ordered triple `(x, y, z)`,
//! where `i` is the usual imaginary unit and `p` is the unstructured unit.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A semi-structured complex number `x + yi + zp`.
///
/// Triples are plain values: every operation in [`crate::algebra::arith`]
/// returns a fresh one. Equality is exact; use [`Triple::approx_eq`] when
/// comparing results of multiplication or division.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Triple {
    /// Real component.
    pub x: f64,
    /// Imaginary (`i`) component.
    pub y: f64,
    /// Unstructured (`p`) component.
    pub z: f64,
}

// ============================================================================
// Construction and inspection
// ============================================================================

impl Triple {
    /// The zero element `(0, 0, 0)`.
    pub const ZERO: Triple = Triple::new(0.0, 0.0, 0.0);

    /// The real unit `(1, 0, 0)`.
    pub const ONE: Triple = Triple::new(1.0, 0.0, 0.0);

    /// The unstructured unit `p = (0, 0, 1)`.
    ///
    /// Substituted for a zero divisor by the DBZ policy.
    pub const UNSTRUCTURED_UNIT: Triple = Triple::new(0.0, 0.0, 1.0);

    /// Create a triple from its three components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True when all three components are exactly zero.
    ///
    /// `-0.0` counts as zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Triple, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }
}

impl From<(f64, f64, f64)> for Triple {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Triple::new(x, y, z)
    }
}

impl From<[f64; 3]> for Triple {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Triple::new(x, y, z)
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for Triple {
    type Err = TripleParseError;

    /// Parse an operand token of the form `x,y,z`.
    ///
    /// Exactly three comma-separated real literals, no whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(TripleParseError::WrongArity { found: parts.len() });
        }

        let mut components = [0.0f64; 3];
        for (index, part) in parts.iter().enumerate() {
            components[index] = part.parse::<f64>().map_err(|_| {
                TripleParseError::InvalidComponent {
                    index,
                    text: (*part).to_string(),
                }
            })?;
        }

        Ok(Triple::from(components))
    }
}

/// Errors from parsing an `x,y,z` operand token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripleParseError {
    #[error("expected 3 comma-separated components, found {found}")]
    WrongArity { found: usize },

    #[error("component {index} is not a real number: {text:?}")]
    InvalidComponent { index: usize, text: String },
}

// ============================================================================
// Formatting
// ============================================================================

/// Format one component for result output.
///
/// Integral values print without a fractional part; anything else is
/// rounded to 6 decimal places. A value that only becomes integral after
/// rounding keeps one decimal (`1.9999999` prints as `2.0`).
pub fn format_component(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        if v == 0.0 {
            return "0".to_string();
        }
        return format!("{:.0}", v);
    }

    let rounded = (v * 1e6).round() / 1e6;
    if rounded.is_finite() && rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            format_component(self.x),
            format_component(self.y),
            format_component(self.z)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        let t: Triple = "1,-2,3".parse().unwrap();
        assert_eq!(t, Triple::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_parse_reals() {
        let t: Triple = "0.5,-1.25,1e2".parse().unwrap();
        assert_eq!(t, Triple::new(0.5, -1.25, 100.0));
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            "1,2".parse::<Triple>(),
            Err(TripleParseError::WrongArity { found: 2 })
        );
        assert_eq!(
            "1,2,3,4".parse::<Triple>(),
            Err(TripleParseError::WrongArity { found: 4 })
        );
    }

    #[test]
    fn test_parse_bad_component() {
        match "1,x,3".parse::<Triple>() {
            Err(TripleParseError::InvalidComponent { index, text }) => {
                assert_eq!(index, 1);
                assert_eq!(text, "x");
            }
            other => panic!("unexpected: {:?}", other),
        }
        // Whitespace inside an operand is not allowed
        assert!("1, 2,3".parse::<Triple>().is_err());
        assert!("1,,3".parse::<Triple>().is_err());
    }

    #[test]
    fn test_format_integral() {
        assert_eq!(Triple::new(1.0, -2.0, 0.0).to_string(), "1,-2,0");
        assert_eq!(Triple::new(-0.0, 0.0, 0.0).to_string(), "0,0,0");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_component(1.0 / 3.0), "0.333333");
        assert_eq!(format_component(-0.5), "-0.5");
        assert_eq!(format_component(2.0000004), "2.0");
        assert_eq!(format_component(-1e-9), "-0.0");
    }

    #[test]
    fn test_zero_checks() {
        assert!(Triple::ZERO.is_zero());
        assert!(Triple::new(-0.0, 0.0, -0.0).is_zero());
        assert!(!Triple::UNSTRUCTURED_UNIT.is_zero());
    }

    #[test]
    fn test_display_parses_back() {
        let t = Triple::new(3.0, -0.25, 7.0);
        let back: Triple = t.to_string().parse().unwrap();
        assert_eq!(back, t);
    }
}
