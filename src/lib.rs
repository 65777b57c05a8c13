//! # SSCN Calculator
//!
//! A division-by-zero calculator for semi-structured complex numbers.
//!
//! A semi-structured complex number `x + yi + zp` extends the complex
//! numbers with an unstructured unit `p`. Equations over these numbers are
//! evaluated by two calculators sharing one pipeline: the standard one
//! aborts on division by zero, the DBZ one divides by `p` instead and
//! always produces a value.

pub mod algebra;
pub mod expr;
pub mod calc;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use algebra::{Triple, DivideByZero};
pub use expr::{Token, Operator, CalcError, ArithmeticPolicy, Std, Dbz, Mode, Evaluation};
pub use expr::{infix_to_postfix, evaluate_postfix};
pub use calc::{Calculator, StdCalculator, DbzCalculator, Outcome, BatchReport, solve, run_batch};
