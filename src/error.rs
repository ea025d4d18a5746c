//! Top-level error type.
//!
//! Evaluation failures are not errors at this level: they are reported to
//! the user as display text. `CalcError` covers misuse of the API.

use crate::builder::BuildError;
use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("No history entry at index {index} (history has {len} entries)")]
    HistoryIndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
