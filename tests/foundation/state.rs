//! Integration tests for SessionState

use chatline_foundation::{DEFAULT_USERNAME, SessionState};

#[test]
fn new_state_uses_defaults() {
    let state = SessionState::new();
    assert_eq!(state.username(), DEFAULT_USERNAME);
    assert_eq!(state.username(), "username");
    assert!(!state.debug_enabled());
}

#[test]
fn default_matches_new() {
    let state = SessionState::default();
    assert_eq!(state.username(), SessionState::new().username());
    assert_eq!(state.debug_enabled(), SessionState::new().debug_enabled());
}

#[test]
fn username_can_be_replaced() {
    let mut state = SessionState::with_username("alice");
    assert_eq!(state.username(), "alice");

    state.set_username("bob");
    assert_eq!(state.username(), "bob");
}

#[test]
fn toggle_debug_returns_new_value() {
    let mut state = SessionState::new();
    assert!(state.toggle_debug());
    assert!(state.debug_enabled());
    assert!(!state.toggle_debug());
    assert!(!state.debug_enabled());
}

#[test]
fn set_debug_is_idempotent() {
    let mut state = SessionState::new();
    state.set_debug(true);
    state.set_debug(true);
    assert!(state.debug_enabled());
}
