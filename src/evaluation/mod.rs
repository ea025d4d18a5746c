//! Expression evaluation.
//!
//! This module ties the symbol translator to a numeric backend:
//! - Translate display glyphs into evaluator syntax
//! - Run the backend and classify the outcome
//! - Record successful results in the history
//!
//! Failures never escape as errors. They come back as
//! [`EvaluationResult::SyntaxError`] or [`EvaluationResult::MathError`]
//! together with the text to show in place of the expression.

mod evaluator;
mod format;
mod outcome;

pub use evaluator::{floored_mod, EvalError, Evaluator, MevalEvaluator};
pub use format::format_number;
pub use outcome::{Evaluation, EvaluationResult, MATH_ERROR, SYNTAX_ERROR};

use crate::core::History;
use crate::translate::{strip_whitespace, translate};
use tracing::debug;

/// Evaluates display expressions through a numeric backend.
#[derive(Debug, Clone)]
pub struct ExpressionEvaluator<E = MevalEvaluator> {
    backend: E,
}

impl Default for ExpressionEvaluator<MevalEvaluator> {
    fn default() -> Self {
        Self::new(MevalEvaluator)
    }
}

impl<E: Evaluator> ExpressionEvaluator<E> {
    pub fn new(backend: E) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &E {
        &self.backend
    }

    /// Evaluate a raw display expression.
    ///
    /// On success the whitespace-stripped original expression is recorded
    /// in `history`. On failure `history` is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::core::History;
    /// use calcpad::evaluation::{EvaluationResult, ExpressionEvaluator, MevalEvaluator};
    ///
    /// let evaluator = ExpressionEvaluator::new(MevalEvaluator);
    /// let mut history = History::new();
    ///
    /// let ok = evaluator.evaluate("√(9)", &mut history);
    /// assert_eq!(ok.display, "3");
    /// assert_eq!(ok.result, EvaluationResult::NumericValue(3.0));
    ///
    /// let bad = evaluator.evaluate("5÷0", &mut history);
    /// assert_eq!(bad.display, "Math Error");
    /// assert_eq!(history.len(), 1);
    /// ```
    pub fn evaluate(&self, raw: &str, history: &mut History) -> Evaluation {
        let translated = translate(raw);

        let value = match self.backend.evaluate_numeric(&translated) {
            Ok(value) => value,
            Err(err) => {
                debug!(expression = %raw, translated = %translated, error = %err, "syntax error");
                return Evaluation {
                    display: SYNTAX_ERROR.to_string(),
                    result: EvaluationResult::SyntaxError,
                };
            }
        };

        if !value.is_finite() {
            debug!(expression = %raw, translated = %translated, value, "math error");
            return Evaluation {
                display: MATH_ERROR.to_string(),
                result: EvaluationResult::MathError,
            };
        }

        let text = format_number(value);
        debug!(expression = %raw, translated = %translated, result = %text, "evaluated");
        history.record(&strip_whitespace(raw), value);

        Evaluation {
            display: text,
            result: EvaluationResult::NumericValue(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(raw: &str) -> (Evaluation, History) {
        let mut history = History::new();
        let evaluation = ExpressionEvaluator::new(MevalEvaluator).evaluate(raw, &mut history);
        (evaluation, history)
    }

    #[test]
    fn test_glyph_arithmetic() {
        assert_eq!(evaluate("6×7").0.display, "42");
        assert_eq!(evaluate("8÷2").0.display, "4");
        assert_eq!(evaluate("5−8").0.display, "-3");
        assert_eq!(evaluate("(1+2)×3").0.display, "9");
    }

    #[test]
    fn test_division_by_zero_is_math_error() {
        let (evaluation, history) = evaluate("5÷0");
        assert_eq!(evaluation.display, "Math Error");
        assert_eq!(evaluation.result, EvaluationResult::MathError);
        assert!(history.is_empty());
    }

    #[test]
    fn test_domain_error_is_math_error() {
        let (evaluation, _) = evaluate("√(0−1)");
        assert_eq!(evaluation.result, EvaluationResult::MathError);
    }

    #[test]
    fn test_incomplete_expression_is_syntax_error() {
        let (evaluation, history) = evaluate("2+");
        assert_eq!(evaluation.display, "Syntax Error");
        assert_eq!(evaluation.result, EvaluationResult::SyntaxError);
        assert!(history.is_empty());
    }

    #[test]
    fn test_mismatched_parens_is_syntax_error() {
        assert_eq!(evaluate("(1+2").0.result, EvaluationResult::SyntaxError);
    }

    #[test]
    fn test_sqrt_records_history() {
        let (evaluation, history) = evaluate("√(9)");
        assert_eq!(evaluation.display, "3");

        let entry = history.get(0).unwrap();
        assert_eq!(entry.display_expression, "√(9)");
        assert_eq!(entry.display_result, "3");
    }

    #[test]
    fn test_square_pi_percent_mod() {
        assert_eq!(evaluate("3²").0.display, "9");
        assert_eq!(evaluate("π").0.display, "3.141592653589793");
        assert_eq!(evaluate("50%").0.display, "0.5");
        assert_eq!(evaluate("10mod4").0.display, "2");
    }

    #[test]
    fn test_percent_keeps_literal_semantics() {
        // 5 + 10 * 0.01, not "5 plus 10% of 5"
        let value = evaluate("5+10%").0.value().unwrap();
        assert!((value - 5.1).abs() < 1e-12);
    }

    #[test]
    fn test_history_stores_stripped_expression() {
        let (_, history) = evaluate(" 1 + 2 ");
        assert_eq!(history.restore(0), Some("1+2"));
    }

    #[test]
    fn test_long_expression_truncated_in_history() {
        let (evaluation, history) = evaluate("1234567890+1");
        assert_eq!(evaluation.display, "1234567891");

        let entry = history.get(0).unwrap();
        assert_eq!(entry.original_expression, "1234567890+1");
        assert_eq!(entry.display_expression, "1234567890...");
        assert_eq!(entry.display_result, "1234567891");
    }

    #[test]
    fn test_result_is_idempotent() {
        let (first, mut history) = evaluate("1÷3");
        let again = ExpressionEvaluator::new(MevalEvaluator).evaluate(&first.display, &mut history);
        assert_eq!(again.value(), first.value());
    }

    #[test]
    fn test_evaluation_logs_under_debug_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let (evaluation, history) = evaluate("6×7");
            assert_eq!(evaluation.display, "42");
            assert_eq!(history.get(0).unwrap().display_result, "42");

            assert_eq!(evaluate("2+").0.display, "Syntax Error");
            assert_eq!(evaluate("1÷0").0.display, "Math Error");
        });
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(evaluate("2π").0.display, "6.283185307179586");
        assert_eq!(evaluate("2√(9)").0.display, "6");
        assert_eq!(evaluate("(1+2)(3)").0.display, "9");
        assert_eq!(evaluate("2(3)").0.display, "6");
    }

    #[test]
    fn test_mod_is_floored_for_negative_operands() {
        assert_eq!(evaluate("−7mod3").0.display, "2");
        assert_eq!(evaluate("7mod−3").0.display, "-2");
        assert_eq!(evaluate("7mod3").0.display, "1");
        assert_eq!(evaluate("5mod0").0.display, "5");
    }

    #[test]
    fn test_custom_backend() {
        let evaluator = ExpressionEvaluator::new(|text: &str| {
            if text == "sqrt(4)" {
                Ok(2.0)
            } else {
                Err(EvalError::Parse(text.to_string()))
            }
        });
        let mut history = History::new();

        assert_eq!(evaluator.evaluate("√(4)", &mut history).display, "2");
        assert_eq!(
            evaluator.evaluate("√(5)", &mut history).display,
            "Syntax Error"
        );
        assert_eq!(history.len(), 1);
    }
}
