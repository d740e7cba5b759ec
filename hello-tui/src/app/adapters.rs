//! Input event adapters
//!
//! Turn raw UI events into domain actions. They wrap the raw value and
//! nothing else: no trimming, no validation.

use libhello::Action;

/// The name field's text changed
pub fn name_changed(text: impl Into<String>) -> Action {
    Action::changed_name(text)
}

/// The "Increment Age" button was activated
pub fn increment_pressed() -> Action {
    Action::IncrementAge
}
