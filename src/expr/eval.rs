//! Postfix evaluation.
//!
//! A single operand stack. Each operator pops the second operand first,
//! then the first, and pushes the policy's result.

use serde::{Serialize, Deserialize};
use crate::algebra::Triple;
use crate::expr::{ArithmeticPolicy, CalcError, Operator, Token};

/// Result of evaluating one equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The single value left on the stack.
    pub value: Triple,
    /// Divisions whose divisor was exactly zero.
    pub zero_divisions: usize,
}

/// Evaluate a postfix token sequence under `policy`.
pub fn evaluate_postfix<P: ArithmeticPolicy>(
    postfix: &[Token],
    policy: &P,
) -> Result<Evaluation, CalcError> {
    let mut stack: Vec<Triple> = Vec::with_capacity(postfix.len() / 2 + 1);
    let mut zero_divisions = 0;

    for (position, token) in postfix.iter().enumerate() {
        match *token {
            Token::Operand(value) => stack.push(value),
            Token::Operator(op) => {
                let second = stack.pop().ok_or(CalcError::StackUnderflow { position })?;
                let first = stack.pop().ok_or(CalcError::StackUnderflow { position })?;

                if op == Operator::Divide && second.is_zero() {
                    zero_divisions += 1;
                }

                let result = policy.apply(first, second, op)?;
                stack.push(result);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(Evaluation { value: *value, zero_divisions }),
        [] => Err(CalcError::EmptyEquation),
        rest => Err(CalcError::UnbalancedStack { remaining: rest.len() }),
    }
}
