//! Calcpad: the core of a keypad calculator widget
//!
//! Calcpad turns clicks and keystrokes into arithmetic. It translates the
//! keypad's display glyphs (`×`, `÷`, `π`, `√`, `²`, `%`, `mod`) into
//! evaluator syntax, evaluates the result through a pluggable numeric
//! backend, and keeps a newest-first history of successful evaluations that
//! can be clicked to restore the original expression.
//!
//! # Core Concepts
//!
//! - **Translation**: an ordered glyph table plus a pass for `mod`
//! - **Evaluation**: numeric result, `Math Error` or `Syntax Error`
//! - **History**: truncated previews that keep the full source text
//! - **Input state machine**: decides whether input replaces, extends or
//!   chains onto the display buffer
//!
//! # Example
//!
//! ```rust
//! use calcpad::input::{InputEvent, Key, Operator, ScriptedInput};
//! use calcpad::Calculator;
//!
//! let mut calc = Calculator::new();
//! let mut input = ScriptedInput::new()
//!     .typed("1234567890+1")
//!     .then(InputEvent::Submit)
//!     .click(Key::Operator(Operator::Subtract))
//!     .click(Key::Digit(1))
//!     .then(InputEvent::Submit);
//!
//! calc.run(&mut input);
//!
//! assert_eq!(calc.buffer(), "1234567890");
//! assert_eq!(calc.history().len(), 2);
//! assert_eq!(calc.history().get(1).unwrap().display_expression, "1234567890...");
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod core;
pub mod display;
pub mod error;
pub mod evaluation;
pub mod input;
pub mod machine;
pub mod translate;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::CalculatorConfig;
pub use context::{Mode, Theme, UiContext};
pub use crate::core::{History, HistoryEntry, State};
pub use error::CalcError;
pub use evaluation::{Evaluation, EvaluationResult, Evaluator, MevalEvaluator};
pub use input::{InputEvent, InputSource, Key, KeyCode, Operator};
pub use machine::{Calculator, InputMode};
