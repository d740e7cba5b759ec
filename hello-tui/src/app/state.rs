//! UI state
//!
//! Immutable state of the terminal front end. All transitions happen
//! through the reducer (see `reducer.rs`).

use libhello::config::UiConfig;

use super::actions::Focus;

/// Front-end state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Control receiving key input
    pub focus: Focus,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl UiState {
    pub fn new(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Name,
            help_visible: false,
            error: None,
            config,
        }
    }

    /// Is an overlay capturing input?
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.error.is_some()
    }
}
