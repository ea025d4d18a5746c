//! Guard predicates for gating input transitions.
//!
//! Guards are pure boolean functions over some context. The input state
//! machine uses one to decide whether a clicked key continues the last
//! result (chaining) or starts a fresh expression.

use std::fmt;

/// Pure predicate over a context value.
///
/// # Example
///
/// ```rust
/// use calcpad::core::Guard;
///
/// let short = Guard::new(|text: &String| text.chars().count() <= 10);
///
/// assert!(short.check(&"12+3".to_string()));
/// assert!(!short.check(&"1234567890+1".to_string()));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
