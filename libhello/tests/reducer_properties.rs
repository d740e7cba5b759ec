//! Reducer transition properties
//!
//! Checks every transition rule against a spread of starting states
//! and names instead of a single fixture.

use libhello::{reduce, reduce_raw, Action, AppState, RawAction, ReducerError};

fn sample_states() -> Vec<AppState> {
    vec![
        AppState::new(),
        AppState::with("", 0),
        AppState::with("Zee", 1),
        AppState::with("Hello 世界 🚀", 99),
        AppState::with("   ", 12345),
        AppState::with("Near max", u32::MAX - 1),
    ]
}

fn sample_names() -> Vec<&'static str> {
    vec!["", "Zee", "Arif", "名前", "line\nbreak", "  padded  "]
}

#[test]
fn test_increment_age_adds_one_and_keeps_name() {
    for state in sample_states() {
        let next = reduce(&state, Action::IncrementAge);

        assert_eq!(next.age, state.age + 1, "from {:?}", state);
        assert_eq!(next.name, state.name, "from {:?}", state);
    }
}

#[test]
fn test_changed_name_sets_name_and_keeps_age() {
    for state in sample_states() {
        for name in sample_names() {
            let next = reduce(&state, Action::changed_name(name));

            assert_eq!(next.name, name);
            assert_eq!(next.age, state.age);
        }
    }
}

#[test]
fn test_name_is_not_validated_or_trimmed() {
    let next = reduce(&AppState::new(), Action::changed_name("  padded  "));
    assert_eq!(next.name, "  padded  ");
}

#[test]
fn test_same_inputs_give_equal_outputs() {
    for state in sample_states() {
        let snapshot = state.clone();

        let a = reduce(&state, Action::changed_name("Zee"));
        let b = reduce(&state, Action::changed_name("Zee"));

        assert_eq!(a, b);
        assert_eq!(state, snapshot, "input state must not change");
    }
}

#[test]
fn test_unrecognized_action_fails() {
    let result = reduce_raw(&AppState::with("Arif", 40), RawAction::new("bogus"));

    match result {
        Err(ReducerError::UnrecognizedAction { kind }) => assert_eq!(kind, "bogus"),
        other => panic!("Expected UnrecognizedAction, got {:?}", other),
    }
}

#[test]
fn test_raw_and_typed_paths_agree() {
    for state in sample_states() {
        let typed = reduce(&state, Action::IncrementAge);
        let raw = reduce_raw(&state, RawAction::new("increment_age")).unwrap();
        assert_eq!(typed, raw);
    }
}
