//! Calculator drivers.
//!
//! A [`Calculator`] runs the full pipeline (tokenize, convert to postfix,
//! evaluate) under one arithmetic policy. Batches are processed one
//! equation at a time; a failing equation never affects the others.

use std::fmt;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use crate::algebra::Triple;
use crate::expr::{
    evaluate_postfix, infix_to_postfix, ArithmeticPolicy, CalcError, Dbz, Evaluation, Mode, Std,
};

/// Marker written for an equation aborted by division by zero.
pub const ERR_MARKER: &str = "ERR";

/// The recorded result of one equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The equation evaluated to a triple.
    Value(Triple),
    /// Aborted by division by zero (standard policy only).
    DivideByZero,
    /// Any other failure: malformed operand, unknown operator, bad structure.
    Failed(String),
}

impl Outcome {
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// The result triple, if the equation completed.
    pub fn value(&self) -> Option<Triple> {
        match self {
            Outcome::Value(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<Result<Triple, CalcError>> for Outcome {
    fn from(result: Result<Triple, CalcError>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(CalcError::DivideByZero(_)) => Outcome::DivideByZero,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(t) => write!(f, "{}", t),
            Outcome::DivideByZero => write!(f, "{}", ERR_MARKER),
            Outcome::Failed(msg) => write!(f, "{}:{}", ERR_MARKER, msg),
        }
    }
}

/// Results of one batch, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub mode: Mode,
    pub outcomes: Vec<Outcome>,
    /// Equations that produced a triple.
    pub equations_completed: usize,
    /// STD: equations aborted by division by zero.
    /// DBZ: zero divisors replaced by the unstructured unit.
    pub dbz_count: usize,
}

impl BatchReport {
    fn collect(mode: Mode, evaluations: Vec<Result<Evaluation, CalcError>>) -> Self {
        let mut equations_completed = 0;
        let mut dbz_count = 0;
        let mut outcomes = Vec::with_capacity(evaluations.len());

        for evaluation in evaluations {
            match &evaluation {
                Ok(e) => {
                    equations_completed += 1;
                    dbz_count += e.zero_divisions;
                }
                Err(e) if e.is_divide_by_zero() => dbz_count += 1,
                Err(_) => {}
            }
            outcomes.push(Outcome::from(evaluation.map(|e| e.value)));
        }

        info!(
            mode = %mode,
            submitted = outcomes.len(),
            completed = equations_completed,
            dbz = dbz_count,
            "batch finished"
        );

        Self { mode, outcomes, equations_completed, dbz_count }
    }

    /// Number of equations submitted.
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Formatted result strings, one per equation.
    pub fn results(&self) -> Vec<String> {
        self.outcomes.iter().map(|o| o.to_string()).collect()
    }

    /// The results as written to an output file: one per line, newline-terminated.
    pub fn output_text(&self) -> String {
        let mut text = self.results().join("\n");
        text.push('\n');
        text
    }
}

/// A calculator parameterized by its division-by-zero policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator<P> {
    policy: P,
}

/// The standard calculator.
pub type StdCalculator = Calculator<Std>;

/// The division-by-zero calculator.
pub type DbzCalculator = Calculator<Dbz>;

impl<P: ArithmeticPolicy> Calculator<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// The policy this calculator evaluates with.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Evaluate one infix equation.
    pub fn evaluate(&self, equation: &str) -> Result<Evaluation, CalcError> {
        let postfix = infix_to_postfix(equation)?;
        let result = evaluate_postfix(&postfix, &self.policy);
        match &result {
            Ok(e) => debug!(policy = P::NAME, result = %e.value, "evaluated {:?}", equation),
            Err(err) => debug!(policy = P::NAME, error = %err, "failed {:?}", equation),
        }
        result
    }

    /// Evaluate one equation and record its outcome.
    pub fn solve(&self, equation: &str) -> Outcome {
        Outcome::from(self.evaluate(equation).map(|e| e.value))
    }

    /// Process a batch sequentially.
    pub fn run<S: AsRef<str>>(&self, equations: &[S]) -> BatchReport {
        let evaluations = equations
            .iter()
            .map(|eq| self.evaluate(eq.as_ref()))
            .collect();
        BatchReport::collect(P::MODE, evaluations)
    }

    /// Process a batch on the rayon pool. Output order matches input order.
    pub fn run_parallel<S: AsRef<str> + Sync>(&self, equations: &[S]) -> BatchReport
    where
        P: Sync,
    {
        let evaluations = equations
            .par_iter()
            .map(|eq| self.evaluate(eq.as_ref()))
            .collect();
        BatchReport::collect(P::MODE, evaluations)
    }
}

/// Evaluate one equation under a runtime-selected mode.
pub fn solve(mode: Mode, equation: &str) -> Outcome {
    match mode {
        Mode::Std => StdCalculator::default().solve(equation),
        Mode::Dbz => DbzCalculator::default().solve(equation),
    }
}

/// Process a batch under a runtime-selected mode.
pub fn run_batch<S: AsRef<str> + Sync>(mode: Mode, equations: &[S], parallel: bool) -> BatchReport {
    match (mode, parallel) {
        (Mode::Std, false) => StdCalculator::default().run(equations),
        (Mode::Std, true) => StdCalculator::default().run_parallel(equations),
        (Mode::Dbz, false) => DbzCalculator::default().run(equations),
        (Mode::Dbz, true) => DbzCalculator::default().run_parallel(equations),
    }
}
