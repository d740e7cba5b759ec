//! Application module
//!
//! Contains the terminal front end's architecture:
//! - Actions: what can happen to the UI itself (focus, overlays, quit)
//! - State: what the UI shows right now
//! - Reducer: pure function (UiState, UiAction) -> UiState
//! - Adapters: raw input -> domain `Action`
//! - Keymap: which key goes where
//!
//! The name/age record is not stored here. It lives in the
//! `libhello::Store` owned by `App`.

pub mod actions;
pub mod adapters;
pub mod controller;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Focus, UiAction};
pub use controller::App;
pub use keymap::{route_key, Route};
pub use reducer::reduce_ui;
pub use state::UiState;
