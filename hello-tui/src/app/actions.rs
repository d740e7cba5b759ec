//! UI actions
//!
//! Transitions of the front end's own state. Changes to the name and age
//! go through `libhello::Action` instead.

/// Actions that change `UiState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Move focus to the next control
    FocusNext,

    /// Move focus to the previous control
    FocusPrev,

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Name text input
    Name,

    /// "Increment Age" button
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Button,
            Focus::Button => Focus::Name,
        }
    }

    // Two controls, so the cycle is symmetric
    pub fn prev(self) -> Self {
        self.next()
    }
}
