//! Input state machine.
//!
//! The [`Calculator`] owns the display buffer and decides, for every click
//! or keystroke, whether the input replaces the buffer, extends it, or
//! continues the last result. It is the only component that mutates the
//! buffer.

use crate::builder::CalculatorBuilder;
use crate::config::CalculatorConfig;
use crate::context::{Mode, Theme, UiContext};
use crate::core::{Guard, History, State};
use crate::display::{DisplaySurface, TextDisplay};
use crate::error::CalcError;
use crate::evaluation::{Evaluation, Evaluator, ExpressionEvaluator, MevalEvaluator};
use crate::input::{InputEvent, InputSource, Key, KeyCode};
use crate::state_enum;
use std::fmt;
use tracing::{debug, trace, warn};

state_enum! {
    /// Whether the next accepted input replaces or extends the buffer.
    #[derive(Copy, Eq, Hash)]
    pub enum InputMode {
        /// The buffer holds a finished result (or nothing); the next
        /// input starts over unless it chains onto the result
        NewExpression,
        /// The buffer holds an expression being typed
        Append,
    }
    initial: NewExpression
}

/// Facts available to the chaining guard when a key is clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyContext {
    pub input_mode: InputMode,
    /// The last evaluation produced a finite number
    pub has_valid_result: bool,
    pub key: Key,
}

/// Default chaining rule: an operator clicked right after a valid result
/// continues from that result.
pub fn chaining_guard() -> Guard<KeyContext> {
    Guard::new(|ctx: &KeyContext| {
        ctx.input_mode == InputMode::NewExpression && ctx.has_valid_result && ctx.key.is_operator()
    })
}

/// Calculator widget core.
///
/// # Example
///
/// ```rust
/// use calcpad::input::{Key, Operator};
/// use calcpad::machine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.click(Key::Digit(3));
/// calc.click(Key::Operator(Operator::Add));
/// calc.click(Key::Digit(4));
/// calc.submit();
/// assert_eq!(calc.buffer(), "7");
///
/// // An operator right after a result continues from it.
/// calc.click(Key::Operator(Operator::Add));
/// calc.click(Key::Digit(3));
/// calc.submit();
/// assert_eq!(calc.buffer(), "10");
/// assert_eq!(calc.history().len(), 2);
/// ```
pub struct Calculator<E = MevalEvaluator, D = TextDisplay> {
    buffer: String,
    input_mode: InputMode,
    last_result: Option<f64>,
    history: History,
    evaluator: ExpressionEvaluator<E>,
    context: UiContext,
    display: D,
    chain_guard: Guard<KeyContext>,
}

impl Calculator {
    /// Calculator with the default configuration, `meval` backend and an
    /// in-memory display.
    pub fn new() -> Self {
        let config = CalculatorConfig::default();
        let context = UiContext::new(config.initial_mode, config.initial_theme);
        Self::from_parts(
            ExpressionEvaluator::default(),
            TextDisplay::new(),
            context,
            History::with_preview(config.history_preview_width, config.history_ellipsis),
            chaining_guard(),
        )
    }

    /// Build a default calculator from a JSON configuration document.
    pub fn from_json_config(text: &str) -> Result<Self, CalcError> {
        let config = CalculatorConfig::from_json_str(text)?;
        Ok(CalculatorBuilder::new().config(config).build()?)
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, D> fmt::Debug for Calculator<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("buffer", &self.buffer)
            .field("input_mode", &self.input_mode)
            .field("last_result", &self.last_result)
            .field("history", &self.history.len())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<E: Evaluator, D: DisplaySurface> Calculator<E, D> {
    pub(crate) fn from_parts(
        evaluator: ExpressionEvaluator<E>,
        display: D,
        context: UiContext,
        history: History,
        chain_guard: Guard<KeyContext>,
    ) -> Self {
        Self {
            buffer: String::new(),
            input_mode: InputMode::default(),
            last_result: None,
            history,
            evaluator,
            context,
            display,
            chain_guard,
        }
    }

    /// Current display buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Value of the last evaluation, if it produced a finite number.
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn has_valid_result(&self) -> bool {
        self.last_result.is_some_and(f64::is_finite)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mutable history access, for registering insert callbacks.
    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn context(&self) -> &UiContext {
        &self.context
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn evaluator(&self) -> &ExpressionEvaluator<E> {
        &self.evaluator
    }

    /// Handle a keypad click.
    ///
    /// Returns `false` when the key is invalid or not available in the
    /// current mode, and was ignored.
    pub fn click(&mut self, key: Key) -> bool {
        if !key.is_valid() {
            warn!(?key, "invalid keypad key ignored");
            return false;
        }

        let mode = self.context.mode();
        if !key.is_available_in(mode) {
            debug!(key = key.glyph(), mode = mode.name(), "key not available in mode");
            return false;
        }

        let key_context = KeyContext {
            input_mode: self.input_mode,
            has_valid_result: self.has_valid_result(),
            key,
        };

        if self.chain_guard.check(&key_context) {
            debug!(key = key.glyph(), buffer = %self.buffer, "chaining onto result");
            self.buffer.push_str(key.insert_text());
        } else if self.input_mode == InputMode::NewExpression {
            self.buffer.clear();
            self.buffer.push_str(key.insert_text());
        } else {
            self.buffer.push_str(key.insert_text());
        }

        self.transition(InputMode::Append);
        self.sync_display();
        true
    }

    /// Handle a keyboard key.
    ///
    /// `Enter` submits a non-empty buffer and never inserts a newline. On
    /// an empty buffer it behaves like any other non-printing key.
    pub fn press(&mut self, key: &KeyCode) -> Option<Evaluation> {
        match key {
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                if !self.buffer.is_empty() {
                    return self.submit();
                }
            }
            KeyCode::Escape => {
                self.escape();
                return None;
            }
            KeyCode::Backspace => {
                self.buffer.pop();
            }
            KeyCode::Char(c) => self.buffer.push(*c),
            KeyCode::Named(name) => trace!(key = %name, "non-printing key"),
        }

        self.transition(InputMode::Append);
        self.sync_display();
        None
    }

    /// Empty the buffer. The input mode is left as it is.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.sync_display();
    }

    /// Evaluate the buffer, replacing it with the result or error text.
    ///
    /// Does nothing and returns `None` when the buffer is empty.
    pub fn submit(&mut self) -> Option<Evaluation> {
        if self.buffer.is_empty() {
            return None;
        }

        let evaluation = self.evaluator.evaluate(&self.buffer, &mut self.history);
        self.last_result = evaluation.value();
        self.buffer.clone_from(&evaluation.display);

        self.transition(InputMode::NewExpression);
        self.sync_display();
        Some(evaluation)
    }

    /// Empty the buffer and start a new expression.
    pub fn escape(&mut self) {
        self.buffer.clear();
        self.transition(InputMode::NewExpression);
        self.sync_display();
    }

    /// Put the full original expression of a history entry back into the
    /// buffer for editing.
    pub fn restore_history(&mut self, index: usize) -> Result<(), CalcError> {
        let expression = self
            .history
            .restore(index)
            .ok_or(CalcError::HistoryIndexOutOfRange {
                index,
                len: self.history.len(),
            })?;

        self.buffer = expression.to_string();
        self.transition(InputMode::Append);
        self.sync_display();
        Ok(())
    }

    /// Select a calculator mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.context.set_mode(mode);
    }

    /// Apply the theme toggle's checked state.
    pub fn toggle_theme(&mut self, checked: bool) -> Theme {
        self.context.toggle_theme(checked)
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<Evaluation>, CalcError> {
        trace!(?event, "input event");
        match event {
            InputEvent::KeyPress(key) => return Ok(self.press(&key)),
            InputEvent::ButtonClick(key) => {
                self.click(key);
            }
            InputEvent::Clear => self.clear(),
            InputEvent::Submit => return Ok(self.submit()),
            InputEvent::Escape => self.escape(),
            InputEvent::HistoryClick(index) => self.restore_history(index)?,
            InputEvent::ModeChange(mode) => self.set_mode(mode),
            InputEvent::ThemeToggle(checked) => {
                self.toggle_theme(checked);
            }
        }
        Ok(None)
    }

    /// Drain `source`, handling every event in order.
    ///
    /// Rejected events are logged and skipped. Returns the number of events
    /// handled.
    pub fn run<S: InputSource>(&mut self, source: &mut S) -> usize {
        let mut handled = 0;
        while let Some(event) = source.next_event() {
            if let Err(err) = self.handle(event) {
                warn!(error = %err, "input event rejected");
            }
            handled += 1;
        }
        handled
    }

    fn transition(&mut self, to: InputMode) {
        if self.input_mode != to {
            debug!(
                session = %self.context.session,
                from = self.input_mode.name(),
                to = to.name(),
                "input mode transition"
            );
            self.input_mode = to;
        }
    }

    fn sync_display(&mut self) {
        trace!(text = %self.buffer, "display updated");
        self.display.set_text(&self.buffer);
    }
}
