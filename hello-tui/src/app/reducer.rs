//! Pure reducer for UI state
//!
//! `(UiState, UiAction) -> UiState`, no side effects.

use super::actions::UiAction;
use super::state::UiState;

/// Pure reducer function for the front end's own state
pub fn reduce_ui(state: UiState, action: UiAction) -> UiState {
    match action {
        UiAction::FocusNext => UiState {
            focus: state.focus.next(),
            ..state
        },

        UiAction::FocusPrev => UiState {
            focus: state.focus.prev(),
            ..state
        },

        UiAction::Quit => UiState {
            should_quit: true,
            ..state
        },

        UiAction::ShowHelp => UiState {
            help_visible: true,
            ..state
        },

        UiAction::HideHelp => UiState {
            help_visible: false,
            ..state
        },

        UiAction::ShowError(error) => UiState {
            error: Some(error),
            ..state
        },

        UiAction::DismissError => UiState {
            error: None,
            ..state
        },
    }
}
