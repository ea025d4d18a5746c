//! Calculator configuration.

use crate::context::{Mode, Theme};
use crate::core::{DEFAULT_ELLIPSIS, DEFAULT_PREVIEW_WIDTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("History preview width must be at least 1")]
    ZeroPreviewWidth,

    #[error("History ellipsis must not be empty")]
    EmptyEllipsis,
}

/// Configuration for a calculator instance.
///
/// Every field has a default, so a partial document only overrides what it
/// names.
///
/// # Example
///
/// ```rust
/// use calcpad::config::CalculatorConfig;
/// use calcpad::context::Mode;
///
/// let config = CalculatorConfig::from_json_str(r#"{ "initial_mode": "Scientific" }"#).unwrap();
/// assert_eq!(config.initial_mode, Mode::Scientific);
/// assert_eq!(config.history_preview_width, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Characters kept in history previews before the ellipsis
    pub history_preview_width: usize,
    /// Marker appended to truncated history previews
    pub history_ellipsis: String,
    /// Mode selected when the widget starts
    pub initial_mode: Mode,
    /// Theme applied when the widget starts
    pub initial_theme: Theme,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_preview_width: DEFAULT_PREVIEW_WIDTH,
            history_ellipsis: DEFAULT_ELLIPSIS.to_string(),
            initial_mode: Mode::Standard,
            initial_theme: Theme::Light,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_preview_width == 0 {
            return Err(ConfigError::ZeroPreviewWidth);
        }
        if self.history_ellipsis.is_empty() {
            return Err(ConfigError::EmptyEllipsis);
        }
        Ok(())
    }

    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_initial_theme(mut self, theme: Theme) -> Self {
        self.initial_theme = theme;
        self
    }

    pub fn with_history_preview(mut self, width: usize, ellipsis: impl Into<String>) -> Self {
        self.history_preview_width = width;
        self.history_ellipsis = ellipsis.into();
        self
    }
}
