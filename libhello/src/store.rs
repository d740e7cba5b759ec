//! Dispatching store
//!
//! The `Store` is the single owner of the current `AppState`. Each
//! dispatch runs the reducer, swaps in the result and tells subscribers
//! to re-render. A rejected action leaves the held state untouched.

use crate::action::{Action, RawAction};
use crate::error::ReducerError;
use crate::reducer::reduce;
use crate::state::AppState;

/// Re-render listener, called with the freshly stored state
pub type Subscriber = Box<dyn FnMut(&AppState)>;

/// Diagnostic hook around dispatch
///
/// Inspectors observe; they cannot change the action or the result.
pub trait Inspector {
    /// Called with the current state before an action is reduced
    fn on_dispatch(&self, state: &AppState, action: &Action);

    /// Called when an untyped action could not be applied
    fn on_rejected(&self, _state: &AppState, _error: &ReducerError) {}
}

/// Inspector that writes every dispatch to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingInspector;

impl Inspector for TracingInspector {
    fn on_dispatch(&self, state: &AppState, action: &Action) {
        tracing::debug!(
            kind = action.kind(),
            ?action,
            name = %state.name,
            age = state.age,
            "dispatching action"
        );
    }

    fn on_rejected(&self, state: &AppState, error: &ReducerError) {
        tracing::warn!(
            kind = error.kind(),
            name = %state.name,
            age = state.age,
            "rejected action: {}",
            error
        );
    }
}

/// Holds the current state and applies actions to it
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
    inspectors: Vec<Box<dyn Inspector>>,
    dispatched: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    /// Create a store holding `initial`
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
            inspectors: Vec::new(),
            dispatched: 0,
        }
    }

    /// Attach a diagnostic inspector
    pub fn with_inspector(mut self, inspector: Box<dyn Inspector>) -> Self {
        self.inspectors.push(inspector);
        self
    }

    /// Register a re-render listener
    ///
    /// Listeners run in registration order after every applied action.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&AppState) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of actions applied so far
    pub fn dispatch_count(&self) -> u64 {
        self.dispatched
    }

    /// Apply a typed action
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        for inspector in &self.inspectors {
            inspector.on_dispatch(&self.state, &action);
        }

        self.state = reduce(&self.state, action);
        self.dispatched += 1;

        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }

        &self.state
    }

    /// Apply an untyped action
    ///
    /// On failure the error goes back to the caller, the held state is
    /// kept and subscribers are not notified.
    pub fn dispatch_raw(&mut self, raw: RawAction) -> Result<&AppState, ReducerError> {
        match Action::try_from(raw) {
            Ok(action) => Ok(self.dispatch(action)),
            Err(error) => {
                for inspector in &self.inspectors {
                    inspector.on_rejected(&self.state, &error);
                }
                Err(error)
            }
        }
    }

    /// Give up the store and keep its final state
    pub fn into_state(self) -> AppState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Inspector for Recorder {
        fn on_dispatch(&self, state: &AppState, action: &Action) {
            self.0
                .borrow_mut()
                .push(format!("{}@{}", action.kind(), state.age));
        }

        fn on_rejected(&self, _state: &AppState, error: &ReducerError) {
            self.0.borrow_mut().push(format!("rejected:{}", error.kind()));
        }
    }

    #[test]
    fn test_store_starts_with_initial_state() {
        let store = Store::default();
        assert_eq!(store.state(), &AppState::with("Arif", 40));
        assert_eq!(store.dispatch_count(), 0);
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let mut store = Store::default();
        let state = store.dispatch(Action::IncrementAge).clone();

        assert_eq!(state.age, 41);
        assert_eq!(store.state(), &state);
        assert_eq!(store.dispatch_count(), 1);
    }

    #[test]
    fn test_subscribers_see_new_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = Store::default();
        store.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        store.dispatch(Action::changed_name("Zee"));

        assert_eq!(*seen.borrow(), vec![AppState::with("Zee", 40)]);
    }

    #[test]
    fn test_rejected_action_keeps_state() {
        let notified = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&notified);

        let mut store = Store::default();
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let result = store.dispatch_raw(RawAction::new("bogus"));

        assert_eq!(
            result.unwrap_err(),
            ReducerError::UnrecognizedAction {
                kind: "bogus".to_string()
            }
        );
        assert_eq!(store.state(), &AppState::new());
        assert_eq!(store.dispatch_count(), 0);
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn test_inspector_sees_pre_dispatch_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default().with_inspector(Box::new(Recorder(Rc::clone(&log))));

        store.dispatch(Action::IncrementAge);
        store.dispatch(Action::IncrementAge);
        let _ = store.dispatch_raw(RawAction::new("bogus"));

        assert_eq!(
            *log.borrow(),
            vec!["increment_age@40", "increment_age@41", "rejected:bogus"]
        );
    }

    #[test]
    fn test_tracing_inspector_does_not_change_result() {
        let mut plain = Store::default();
        let mut traced = Store::default().with_inspector(Box::new(TracingInspector));

        plain.dispatch(Action::changed_name("Zee"));
        traced.dispatch(Action::changed_name("Zee"));

        assert_eq!(plain.into_state(), traced.into_state());
    }
}
