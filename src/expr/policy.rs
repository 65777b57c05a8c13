//! Arithmetic policies.
//!
//! The evaluator is shared between both calculators; a policy decides
//! only what happens on division. [`Std`] fails on a zero divisor,
//! [`Dbz`] substitutes the unstructured unit and always succeeds.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::algebra::{self, DivideByZero, Triple};
use crate::expr::Operator;

/// A division-by-zero policy plugged into the evaluator.
pub trait ArithmeticPolicy {
    /// Short name used in reports and logs.
    const NAME: &'static str;

    /// Which runtime mode this policy corresponds to.
    const MODE: Mode;

    /// Divide `dividend` by `divisor`.
    fn divide(&self, dividend: Triple, divisor: Triple) -> Result<Triple, DivideByZero>;

    /// Apply one operator to `(first, second)`, in that order.
    fn apply(&self, first: Triple, second: Triple, op: Operator) -> Result<Triple, DivideByZero> {
        match op {
            Operator::Add => Ok(algebra::add(first, second)),
            Operator::Subtract => Ok(algebra::subtract(first, second)),
            Operator::Multiply => Ok(algebra::multiply(first, second)),
            Operator::Divide => self.divide(first, second),
        }
    }
}

/// Standard arithmetic: division by zero aborts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Std;

/// Totalized arithmetic: division by zero divides by `p = (0, 0, 1)` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dbz;

impl ArithmeticPolicy for Std {
    const NAME: &'static str = "STD";
    const MODE: Mode = Mode::Std;

    #[inline]
    fn divide(&self, dividend: Triple, divisor: Triple) -> Result<Triple, DivideByZero> {
        algebra::divide_std(dividend, divisor)
    }
}

impl ArithmeticPolicy for Dbz {
    const NAME: &'static str = "DBZ";
    const MODE: Mode = Mode::Dbz;

    #[inline]
    fn divide(&self, dividend: Triple, divisor: Triple) -> Result<Triple, DivideByZero> {
        Ok(algebra::divide_dbz(dividend, divisor))
    }
}

/// Runtime choice of policy, for front ends that pick it from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Abort the equation on division by zero.
    #[default]
    Std,
    /// Substitute the unstructured unit for a zero divisor.
    Dbz,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Std => Std::NAME,
            Mode::Dbz => Dbz::NAME,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "std" => Ok(Mode::Std),
            "dbz" => Ok(Mode::Dbz),
            other => Err(format!("unknown mode: {} (expected std or dbz)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies_agree_except_on_zero_division() {
        let a = Triple::new(1.0, -1.0, 2.0);
        let b = Triple::new(0.5, 1.0, 0.0);
        for op in Operator::ALL {
            assert_eq!(Std.apply(a, b, op), Dbz.apply(a, b, op));
        }
    }

    #[test]
    fn test_std_fails_on_zero_divisor() {
        let a = Triple::new(1.0, 0.0, 0.0);
        assert_eq!(Std.apply(a, Triple::ZERO, Operator::Divide), Err(DivideByZero));
    }

    #[test]
    fn test_dbz_is_total() {
        let a = Triple::new(1.0, 0.0, 0.0);
        let r = Dbz.apply(a, Triple::ZERO, Operator::Divide).unwrap();
        assert_eq!(r, algebra::divide_dbz(a, Triple::ZERO));
    }

    #[test]
    fn test_apply_keeps_operand_order() {
        let five = Triple::new(5.0, 0.0, 0.0);
        let two = Triple::new(2.0, 0.0, 0.0);
        assert_eq!(Std.apply(five, two, Operator::Subtract).unwrap(), Triple::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_mode_parse_and_names() {
        assert_eq!("STD".parse::<Mode>().unwrap(), Mode::Std);
        assert_eq!("dbz".parse::<Mode>().unwrap(), Mode::Dbz);
        assert!("fast".parse::<Mode>().is_err());
        assert_eq!(Mode::Dbz.to_string(), "DBZ");
        assert_eq!(<Std as ArithmeticPolicy>::MODE, Mode::Std);
    }
}
