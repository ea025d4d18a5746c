//! Core types shared by the evaluator and the input state machine.
//!
//! - Named states via the `State` trait
//! - Guard predicates for transition control
//! - The newest-first calculation history
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{
    truncate_preview, History, HistoryEntry, InsertCallback, DEFAULT_ELLIPSIS,
    DEFAULT_PREVIEW_WIDTH,
};
pub use state::State;
