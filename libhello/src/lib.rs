//! Hello Reducer - reducer-driven profile state
//!
//! A single `AppState` (name + age) updated only through pure
//! `(State, Action) -> State` transitions. The `Store` owns the state
//! and is the only place a new state replaces the old one.

pub mod action;
pub mod config;
pub mod error;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use action::{Action, RawAction};
pub use config::Config;
pub use error::{HelloError, ReducerError, Result};
pub use reducer::{reduce, reduce_raw};
pub use state::AppState;
pub use store::{Inspector, Store, TracingInspector};
