//! Equation reading and evaluation.
//!
//! This module provides:
//! - [`Token`] and [`Operator`] - The equation grammar and precedence table
//! - [`to_postfix`] - Bracket-free shunting-yard conversion
//! - [`evaluate_postfix`] - The shared stack evaluator
//! - [`ArithmeticPolicy`] - The division-by-zero strategy ([`Std`] or [`Dbz`])

mod error;
mod token;
pub mod postfix;
pub mod eval;
pub mod policy;

pub use error::CalcError;
pub use token::{Operator, Token, tokenize, OPERATORS};
pub use postfix::{to_postfix, infix_to_postfix, postfix_strings};
pub use eval::{evaluate_postfix, Evaluation};
pub use policy::{ArithmeticPolicy, Std, Dbz, Mode};
