//! Application controller
//!
//! Ties the pieces together: keys are routed, UI actions go through the
//! UI reducer, domain actions go to the store. A store subscriber flags
//! the screen for redraw.

use std::cell::Cell;
use std::rc::Rc;

use libhello::{Action, AppState, Store};

use super::adapters::name_changed;
use super::event::TuiEvent;
use super::keymap::{route_key, Route};
use super::reducer::reduce_ui;
use super::state::UiState;
use super::{Focus, UiAction};
use crate::ui::name_field::NameField;

/// Running application
pub struct App {
    store: Store,
    ui: UiState,
    name_field: NameField,
    redraw: Rc<Cell<bool>>,
}

impl App {
    /// Create the app around a store
    pub fn new(mut store: Store, ui: UiState) -> Self {
        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        store.subscribe(move |_| flag.set(true));

        let mut name_field = NameField::new(&store.state().name);
        name_field.set_focus(ui.focus == Focus::Name, ui.config.colors);

        Self {
            store,
            ui,
            name_field,
            redraw,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn name_field(&self) -> &NameField {
        &self.name_field
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    /// Returns true once after anything visible changed
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key) => match route_key(&self.ui, key) {
                Route::Ui(action) => self.apply_ui(action),
                Route::Dispatch(action) => self.dispatch(action),
                Route::EditName(key) => {
                    if let Some(text) = self.name_field.input(key) {
                        self.dispatch(name_changed(text));
                    } else {
                        // Cursor moved
                        self.redraw.set(true);
                    }
                }
                Route::Ignore => {}
            },
            TuiEvent::Resize(_, _) => self.redraw.set(true),
            TuiEvent::Tick => {}
        }
    }

    /// Apply a UI-only action
    pub fn apply_ui(&mut self, action: UiAction) {
        tracing::trace!(?action, "ui action");
        self.ui = reduce_ui(self.ui.clone(), action);
        self.name_field
            .set_focus(self.ui.focus == Focus::Name, self.ui.config.colors);
        self.redraw.set(true);
    }

    /// Dispatch a domain action to the store
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }
}
