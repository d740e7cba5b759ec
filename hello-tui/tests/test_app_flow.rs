//! Test event flow from key presses to store state
//!
//! Drives `App` with synthetic events, the same path the event loop uses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hello_tui::{app::event::TuiEvent, App, Focus, UiAction, UiState};
use libhello::{AppState, Store};

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn new_app() -> App {
    App::new(Store::default(), UiState::default())
}

#[test]
fn test_typing_dispatches_name_changes() {
    let mut app = new_app();

    for _ in 0.."Arif".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Zee");

    assert_eq!(app.state(), &AppState::with("Zee", 40));
    assert_eq!(app.name_field().text(), "Zee");
}

#[test]
fn test_button_increments_age() {
    let mut app = new_app();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.ui().focus, Focus::Button);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('+'));

    assert_eq!(app.state(), &AppState::with("Arif", 43));
}

#[test]
fn test_q_in_name_field_is_text() {
    let mut app = new_app();

    press(&mut app, KeyCode::Char('q'));

    assert!(!app.should_quit());
    assert_eq!(app.state().name, "Arifq");
}

#[test]
fn test_store_change_requests_redraw() {
    let mut app = new_app();
    app.take_redraw();

    app.handle_event(TuiEvent::Tick);
    assert!(!app.take_redraw());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert!(app.take_redraw());
}

#[test]
fn test_error_overlay_blocks_input_until_dismissed() {
    let mut app = new_app();
    app.apply_ui(UiAction::ShowError("Configuration error".to_string()));

    type_text(&mut app, "xyz");
    assert_eq!(app.state().name, "Arif");

    press(&mut app, KeyCode::Esc);
    assert!(app.ui().error.is_none());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}
