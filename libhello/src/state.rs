//! Application state
//!
//! Immutable state record. A new value replaces the old one on every
//! transition; nothing edits an `AppState` in place.

use serde::{Deserialize, Serialize};

/// Name the state starts with when nothing else is configured
pub const INITIAL_NAME: &str = "Arif";

/// Age the state starts with when nothing else is configured
pub const INITIAL_AGE: u32 = 40;

/// Root application state
///
/// Always a complete record: the reducer copies every field it does
/// not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Free-form name, no format constraint
    pub name: String,

    /// Age in years
    pub age: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            name: INITIAL_NAME.to_string(),
            age: INITIAL_AGE,
        }
    }
}

impl AppState {
    /// Create state with the built-in initial values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state from explicit values
    pub fn with(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Greeting line shown under the controls
    pub fn greeting(&self) -> String {
        format!("Hello, {} you are {}", self.name, self.age)
    }
}
