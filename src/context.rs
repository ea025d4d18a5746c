//! Widget-scoped UI context: calculator mode and visual theme.
//!
//! One `UiContext` belongs to one calculator instance and is handed to it
//! explicitly. The input state machine only reads the mode; changes come from
//! the mode selector and theme toggle.

use crate::core::State;
use crate::state_enum;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

state_enum! {
    /// Calculator variant controlling which keypad keys are available.
    #[derive(Copy, Eq, Hash)]
    pub enum Mode {
        Standard,
        Scientific,
    }
    initial: Standard
}

impl Mode {
    /// Label shown on the mode selector.
    pub fn label(&self) -> &str {
        self.name()
    }

    /// All modes in selector order.
    pub fn all() -> &'static [Mode] {
        Self::VARIANTS
    }

    /// Look a mode up by its selector label.
    pub fn from_label(label: &str) -> Option<Mode> {
        Self::VARIANTS.iter().copied().find(|m| m.label() == label)
    }
}

state_enum! {
    /// Visual theme of the widget.
    #[derive(Copy, Eq, Hash)]
    pub enum Theme {
        Light,
        Dark,
    }
    initial: Light
}

impl Theme {
    /// Theme selected by the toggle's checked state.
    pub fn from_toggle(checked: bool) -> Theme {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Value written to the root's `data-theme` attribute.
    pub fn attribute(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Mode and theme of one widget instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiContext {
    /// Identifies the widget instance in logs
    pub session: Uuid,
    mode: Mode,
    theme: Theme,
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new(Mode::default(), Theme::default())
    }
}

impl UiContext {
    pub fn new(mode: Mode, theme: Theme) -> Self {
        Self {
            session: Uuid::new_v4(),
            mode,
            theme,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Select a calculator mode.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(session = %self.session, from = self.mode.name(), to = mode.name(), "mode changed");
        }
        self.mode = mode;
    }

    /// Apply the theme toggle's checked state.
    pub fn toggle_theme(&mut self, checked: bool) -> Theme {
        self.theme = Theme::from_toggle(checked);
        debug!(session = %self.session, theme = self.theme.attribute(), "theme changed");
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_standard_light() {
        let ctx = UiContext::default();
        assert_eq!(ctx.mode(), Mode::Standard);
        assert_eq!(ctx.theme(), Theme::Light);
    }

    #[test]
    fn mode_labels_round_trip() {
        for mode in Mode::all() {
            assert_eq!(Mode::from_label(mode.label()), Some(*mode));
        }
        assert_eq!(Mode::all(), &[Mode::Standard, Mode::Scientific]);
        assert_eq!(Mode::Scientific.label(), "Scientific");
        assert_eq!(Mode::from_label("Programmer"), None);
    }

    #[test]
    fn toggle_checked_selects_dark() {
        let mut ctx = UiContext::default();
        assert_eq!(ctx.toggle_theme(true), Theme::Dark);
        assert_eq!(ctx.theme().attribute(), "dark");
        assert_eq!(ctx.toggle_theme(false), Theme::Light);
        assert_eq!(ctx.theme().attribute(), "light");
    }

    #[test]
    fn set_mode_updates_context() {
        let mut ctx = UiContext::default();
        ctx.set_mode(Mode::Scientific);
        assert_eq!(ctx.mode(), Mode::Scientific);
    }

    #[test]
    fn separate_contexts_have_separate_sessions() {
        assert_ne!(UiContext::default().session, UiContext::default().session);
    }
}
