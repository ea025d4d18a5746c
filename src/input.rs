//! Input vocabulary: keypad keys, keyboard keys and the event stream.
//!
//! Every concrete widget (on-screen button, text field, test script) is
//! reduced to the same [`InputEvent`] stream through the [`InputSource`]
//! trait. The state machine consumes nothing else.

use crate::context::Mode;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Binary operators on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
}

impl Operator {
    /// Glyph written into the display buffer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Mod => "mod",
        }
    }
}

/// A keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit `0`..=`9`
    Digit(u8),
    Period,
    LeftParen,
    RightParen,
    Operator(Operator),
    Percent,
    Pi,
    Sqrt,
    Square,
}

impl Key {
    /// Every keypad button, in layout order.
    pub const ALL: [Key; 22] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Period,
        Key::LeftParen,
        Key::RightParen,
        Key::Operator(Operator::Add),
        Key::Operator(Operator::Subtract),
        Key::Operator(Operator::Multiply),
        Key::Operator(Operator::Divide),
        Key::Operator(Operator::Mod),
        Key::Percent,
        Key::Pi,
        Key::Sqrt,
        Key::Square,
    ];

    /// Digit key for `value`, if it is a single decimal digit.
    pub fn digit(value: u8) -> Option<Key> {
        (value <= 9).then_some(Key::Digit(value))
    }

    /// `false` for a `Digit` past 9, which has no button.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Key::Digit(d) if *d > 9)
    }

    /// Text printed on the button. Invalid keys have no text.
    pub fn glyph(&self) -> &'static str {
        match self {
            Key::Digit(d) => DIGITS.get(*d as usize).copied().unwrap_or(""),
            Key::Period => ".",
            Key::LeftParen => "(",
            Key::RightParen => ")",
            Key::Operator(op) => op.glyph(),
            Key::Percent => "%",
            Key::Pi => "π",
            Key::Sqrt => "√",
            Key::Square => "²",
        }
    }

    /// Text inserted into the display buffer; square root opens its
    /// argument list.
    pub fn insert_text(&self) -> &'static str {
        match self {
            Key::Sqrt => "√(",
            other => other.glyph(),
        }
    }

    /// Operator-class keys may continue a previous result.
    pub fn is_operator(&self) -> bool {
        matches!(self, Key::Operator(_) | Key::Percent)
    }

    /// Whether the key is shown on the keypad in `mode`.
    pub fn is_available_in(&self, mode: Mode) -> bool {
        match mode {
            Mode::Scientific => true,
            Mode::Standard => !matches!(
                self,
                Key::Pi | Key::Sqrt | Key::Square | Key::Operator(Operator::Mod)
            ),
        }
    }

    /// Look a key up by its button text.
    pub fn from_glyph(glyph: &str) -> Option<Key> {
        Self::ALL.into_iter().find(|k| k.glyph() == glyph)
    }
}

/// A physical keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    Enter,
    Escape,
    Backspace,
    /// A printable character
    Char(char),
    /// Any other named key (`Shift`, `ArrowLeft`, ...)
    Named(String),
}

/// Discrete input delivered to the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyPress(KeyCode),
    ButtonClick(Key),
    Clear,
    Submit,
    Escape,
    HistoryClick(usize),
    ModeChange(Mode),
    ThemeToggle(bool),
}

/// Source of input events, regardless of the widget producing them.
pub trait InputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// In-memory queue of events, drained in order.
///
/// # Example
///
/// ```rust
/// use calcpad::input::{InputEvent, InputSource, Key, ScriptedInput};
///
/// let mut input = ScriptedInput::new()
///     .click(Key::Digit(7))
///     .then(InputEvent::Submit);
///
/// assert_eq!(input.next_event(), Some(InputEvent::ButtonClick(Key::Digit(7))));
/// assert_eq!(input.next_event(), Some(InputEvent::Submit));
/// assert_eq!(input.next_event(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any event.
    pub fn then(mut self, event: InputEvent) -> Self {
        self.events.push_back(event);
        self
    }

    /// Append a keypad click.
    pub fn click(self, key: Key) -> Self {
        self.then(InputEvent::ButtonClick(key))
    }

    /// Append one keyboard press per character of `text`.
    pub fn typed(mut self, text: &str) -> Self {
        self.events
            .extend(text.chars().map(|c| InputEvent::KeyPress(KeyCode::Char(c))));
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<InputEvent>> for ScriptedInput {
    fn from(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}
