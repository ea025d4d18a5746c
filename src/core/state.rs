//! Core State trait for the widget's named states.
//!
//! The input mode, calculator mode and theme are all small closed sets of
//! states. They share this trait so they can be named in logs and
//! serialized uniformly.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A closed set of widget states with stable names.
///
/// [`InputMode`](crate::machine::InputMode), [`Mode`](crate::context::Mode),
/// [`Theme`](crate::context::Theme) and
/// [`EvaluationResult`](crate::evaluation::EvaluationResult) implement it.
/// The name is what appears in `tracing` fields and mode selector labels.
///
/// # Example
///
/// ```rust
/// use calcpad::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Readout {
///     Blank,
///     Showing,
///     Faulted,
/// }
///
/// impl State for Readout {
///     fn name(&self) -> &str {
///         match self {
///             Self::Blank => "Blank",
///             Self::Showing => "Showing",
///             Self::Faulted => "Faulted",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Faulted)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Variant name, e.g. `"NewExpression"` or `"Scientific"`.
    fn name(&self) -> &str;

    /// `true` for states shown as an error message instead of a value.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Readout {
        Blank,
        Showing,
        Faulted,
    }

    impl State for Readout {
        fn name(&self) -> &str {
            match self {
                Self::Blank => "Blank",
                Self::Showing => "Showing",
                Self::Faulted => "Faulted",
            }
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Faulted)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Readout::Blank.name(), "Blank");
        assert_eq!(Readout::Showing.name(), "Showing");
        assert_eq!(Readout::Faulted.name(), "Faulted");
    }

    #[test]
    fn is_error_identifies_error_states() {
        assert!(!Readout::Blank.is_error());
        assert!(!Readout::Showing.is_error());
        assert!(Readout::Faulted.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Readout::Showing;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Readout = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
