//! Numeric evaluation backends.

use meval::tokenizer::{Operation, Token};
use meval::{Context, ContextProvider, Expr};
use thiserror::Error;

/// Errors raised by a numeric evaluation backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Failed to parse expression: {0}")]
    Parse(String),

    #[error("Failed to evaluate expression: {0}")]
    Evaluation(String),
}

/// External numeric expression evaluation capability.
///
/// Implementations fail on malformed input and otherwise return a plain
/// `f64`, which may be non-finite for domain errors such as division by
/// zero.
pub trait Evaluator {
    fn evaluate_numeric(&self, text: &str) -> Result<f64, EvalError>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<f64, EvalError>,
{
    fn evaluate_numeric(&self, text: &str) -> Result<f64, EvalError> {
        self(text)
    }
}

/// Remainder with the sign of the divisor, `x - y * floor(x / y)`.
///
/// `x mod 0` is `x`.
///
/// ```rust
/// use calcpad::evaluation::floored_mod;
///
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floored_mod(7.0, -3.0), -2.0);
/// assert_eq!(floored_mod(5.0, 0.0), 5.0);
/// ```
pub fn floored_mod(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        x
    } else {
        x - y * (x / y).floor()
    }
}

/// Default backend built on `meval`.
///
/// Supports `+ - * / % ^`, unary minus, functions such as `sqrt`, `sin`,
/// `cos`, `tan`, `ln`, `exp`, `abs`, `floor` and the constants `pi` and `e`.
///
/// `meval` parses the expression into reverse Polish notation; the RPN is
/// then run here so that `%` is a floored modulo (see [`floored_mod`])
/// rather than Rust's truncating remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct MevalEvaluator;

impl Evaluator for MevalEvaluator {
    fn evaluate_numeric(&self, text: &str) -> Result<f64, EvalError> {
        let expr: Expr = text
            .parse()
            .map_err(|e: meval::Error| EvalError::Parse(e.to_string()))?;
        run_rpn(&expr, &meval::builtin())
    }
}

fn pop(stack: &mut Vec<f64>) -> Result<f64, EvalError> {
    stack
        .pop()
        .ok_or_else(|| EvalError::Evaluation("missing operand".to_string()))
}

fn run_rpn(rpn: &[Token], ctx: &Context<'_>) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(16);

    for token in rpn {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Var(name) => {
                let value = ctx
                    .get_var(name)
                    .ok_or_else(|| EvalError::Evaluation(format!("unknown variable `{}`", name)))?;
                stack.push(value);
            }
            Token::Binary(op) => {
                let right = pop(&mut stack)?;
                let left = pop(&mut stack)?;
                stack.push(match op {
                    Operation::Plus => left + right,
                    Operation::Minus => left - right,
                    Operation::Times => left * right,
                    Operation::Div => left / right,
                    Operation::Rem => floored_mod(left, right),
                    Operation::Pow => left.powf(right),
                });
            }
            Token::Unary(Operation::Plus) => {}
            Token::Unary(Operation::Minus) => {
                let x = pop(&mut stack)?;
                stack.push(-x);
            }
            Token::Func(name, Some(arity)) => {
                let arity = *arity;
                if stack.len() < arity {
                    return Err(EvalError::Evaluation(format!(
                        "`{}` expects {} arguments",
                        name, arity
                    )));
                }
                let first = stack.len() - arity;
                let value = ctx
                    .eval_func(name, &stack[first..])
                    .map_err(|e| EvalError::Evaluation(format!("{}: {}", name, e)))?;
                stack.truncate(first);
                stack.push(value);
            }
            other => {
                return Err(EvalError::Evaluation(format!(
                    "unexpected token {:?}",
                    other
                )))
            }
        }
    }

    let value = pop(&mut stack)?;
    if stack.is_empty() {
        Ok(value)
    } else {
        Err(EvalError::Evaluation(format!(
            "{} operands left over",
            stack.len()
        )))
    }
}
