//! Keybindings
//!
//! Decides what a key press means given the current UI state. Pure:
//! routing never touches state, it only names the next step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libhello::Action;

use super::actions::{Focus, UiAction};
use super::adapters::increment_pressed;
use super::state::UiState;

/// Where a key press goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Change the UI's own state
    Ui(UiAction),

    /// Dispatch a domain action to the store
    Dispatch(Action),

    /// Feed the key to the name field
    EditName(KeyEvent),

    /// Nothing to do
    Ignore,
}

/// Map a key press to a route
pub fn route_key(state: &UiState, key: KeyEvent) -> Route {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            return Route::Ui(UiAction::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                UiAction::HideHelp
            } else {
                UiAction::ShowHelp
            };
            return Route::Ui(action);
        }

        (KeyCode::Esc, _) if state.error.is_some() => {
            return Route::Ui(UiAction::DismissError);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return Route::Ui(UiAction::HideHelp);
        }

        (KeyCode::Esc, _) => {
            return Route::Ui(UiAction::Quit);
        }

        _ => {}
    }

    // Overlays swallow everything else
    if state.overlay_visible() {
        return Route::Ignore;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => return Route::Ui(UiAction::FocusNext),
        (KeyCode::BackTab, _) => return Route::Ui(UiAction::FocusPrev),
        _ => {}
    }

    match state.focus {
        Focus::Name => route_name_key(key),
        Focus::Button => route_button_key(key),
    }
}

fn route_name_key(key: KeyEvent) -> Route {
    match (key.code, key.modifiers) {
        // Single-line field: Enter moves on to the button
        (KeyCode::Enter, _) => Route::Ui(UiAction::FocusNext),
        _ => Route::EditName(key),
    }
}

fn route_button_key(key: KeyEvent) -> Route {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) | (KeyCode::Char('+'), _) => {
            Route::Dispatch(increment_pressed())
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => Route::Ui(UiAction::Quit),
        _ => Route::Ignore,
    }
}
