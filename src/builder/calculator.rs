//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::context::UiContext;
use crate::core::{Guard, History, HistoryEntry, InsertCallback};
use crate::display::{DisplaySurface, TextDisplay};
use crate::evaluation::{Evaluator, ExpressionEvaluator, MevalEvaluator};
use crate::machine::{chaining_guard, Calculator, KeyContext};

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use calcpad::builder::CalculatorBuilder;
/// use calcpad::config::CalculatorConfig;
/// use calcpad::context::Mode;
///
/// let calc = CalculatorBuilder::new()
///     .config(CalculatorConfig::default().with_initial_mode(Mode::Scientific))
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.context().mode(), Mode::Scientific);
/// ```
pub struct CalculatorBuilder<E = MevalEvaluator, D = TextDisplay> {
    config: CalculatorConfig,
    evaluator: E,
    display: D,
    context: Option<UiContext>,
    chain_guard: Option<Guard<KeyContext>>,
    on_insert: Vec<InsertCallback>,
}

impl CalculatorBuilder {
    /// Create a new builder with the `meval` backend and an in-memory display.
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            evaluator: MevalEvaluator,
            display: TextDisplay::new(),
            context: None,
            chain_guard: None,
            on_insert: Vec::new(),
        }
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator, D: DisplaySurface> CalculatorBuilder<E, D> {
    /// Set the configuration (validated in `build`).
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the numeric evaluation backend.
    pub fn evaluator<E2: Evaluator>(self, evaluator: E2) -> CalculatorBuilder<E2, D> {
        CalculatorBuilder {
            config: self.config,
            evaluator,
            display: self.display,
            context: self.context,
            chain_guard: self.chain_guard,
            on_insert: self.on_insert,
        }
    }

    /// Replace the display surface.
    pub fn display<D2: DisplaySurface>(self, display: D2) -> CalculatorBuilder<E, D2> {
        CalculatorBuilder {
            config: self.config,
            evaluator: self.evaluator,
            display,
            context: self.context,
            chain_guard: self.chain_guard,
            on_insert: self.on_insert,
        }
    }

    /// Use an existing UI context instead of one built from the
    /// configured initial mode and theme.
    pub fn context(mut self, context: UiContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Replace the chaining rule with a closure (optional).
    pub fn chain_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&KeyContext) -> bool + Send + Sync + 'static,
    {
        self.chain_guard = Some(Guard::new(predicate));
        self
    }

    /// Register a history insert callback (optional, repeatable).
    pub fn on_history_insert<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&HistoryEntry) + Send + 'static,
    {
        self.on_insert.push(Box::new(callback));
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator<E, D>, BuildError> {
        self.config.validate()?;

        let context = self.context.unwrap_or_else(|| {
            UiContext::new(self.config.initial_mode, self.config.initial_theme)
        });

        let mut history = History::with_preview(
            self.config.history_preview_width,
            self.config.history_ellipsis,
        );
        for callback in self.on_insert {
            history.on_insert(callback);
        }

        Ok(Calculator::from_parts(
            ExpressionEvaluator::new(self.evaluator),
            self.display,
            context,
            history,
            self.chain_guard.unwrap_or_else(chaining_guard),
        ))
    }
}
