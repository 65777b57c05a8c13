//! Errors raised while reading or evaluating an equation.

use thiserror::Error;
use crate::algebra::{DivideByZero, TripleParseError};

/// Errors that can occur while processing one equation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{0}")]
    DivideByZero(#[from] DivideByZero),

    #[error("malformed operand {token:?}: {source}")]
    MalformedOperand {
        token: String,
        #[source]
        source: TripleParseError,
    },

    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    #[error("empty equation")]
    EmptyEquation,

    #[error("operator at postfix position {position} is missing an operand")]
    StackUnderflow { position: usize },

    #[error("expected exactly one result, {remaining} operands left on the stack")]
    UnbalancedStack { remaining: usize },
}

impl CalcError {
    /// True for the standard policy's division-by-zero abort.
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, CalcError::DivideByZero(_))
    }
}
