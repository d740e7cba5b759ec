//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(&State, Action) -> State`.
//! It has no side effects and keeps nothing between calls. Diagnostics
//! are attached where actions are dispatched (see `store.rs`), never here.

use crate::action::{Action, RawAction};
use crate::error::ReducerError;
use crate::state::AppState;

/// Pure reducer function
///
/// Takes the current state and an action, returns the next state. The
/// input state is borrowed and never modified.
///
/// # Purity Guarantees
///
/// - No I/O, no logging
/// - No mutation of the input state
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::IncrementAge => AppState {
            name: state.name.clone(),
            // Saturates instead of wrapping at u32::MAX
            age: state.age.saturating_add(1),
        },

        Action::ChangedName { next_name } => AppState {
            name: next_name,
            age: state.age,
        },
    }
}

/// Reduce an untyped action
///
/// Unknown kinds fail with `ReducerError::UnrecognizedAction` before any
/// state is built.
pub fn reduce_raw(state: &AppState, raw: RawAction) -> Result<AppState, ReducerError> {
    let action = Action::try_from(raw)?;
    Ok(reduce(state, action))
}
