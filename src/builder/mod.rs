//! Builder API for ergonomic calculator construction.
//!
//! This module provides a fluent builder for wiring a calculator to its
//! evaluation backend, display surface and history callbacks, plus the
//! `state_enum!` macro for declaring named states.

pub mod calculator;
pub mod error;
pub mod macros;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
