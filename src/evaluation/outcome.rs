//! Evaluation outcomes.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Text shown when the evaluator rejects an expression.
pub const SYNTAX_ERROR: &str = "Syntax Error";

/// Text shown when the evaluator produces a non-finite value.
pub const MATH_ERROR: &str = "Math Error";

/// Classified result of one evaluation request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EvaluationResult {
    /// A finite numeric result
    NumericValue(f64),
    /// The evaluator produced `Infinity` or `NaN`
    MathError,
    /// The evaluator could not parse or compute the expression
    SyntaxError,
}

impl State for EvaluationResult {
    fn name(&self) -> &str {
        match self {
            Self::NumericValue(_) => "NumericValue",
            Self::MathError => "MathError",
            Self::SyntaxError => "SyntaxError",
        }
    }

    fn is_error(&self) -> bool {
        !matches!(self, Self::NumericValue(_))
    }
}

impl EvaluationResult {
    /// The numeric value, if the evaluation succeeded.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::NumericValue(v) => Some(*v),
            Self::MathError | Self::SyntaxError => None,
        }
    }
}

/// Display text and classified result of an evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Text that replaces the display buffer
    pub display: String,
    pub result: EvaluationResult,
}

impl Evaluation {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        !self.result.is_error()
    }

    pub fn value(&self) -> Option<f64> {
        self.result.value()
    }
}
