//! Integration tests for the command registry
//!
//! Tests command resolution, effects on session state, and messages.

use chatline_foundation::SessionState;
use chatline_parser::{Command, CommandKind, CommandRegistry};

fn registry() -> CommandRegistry {
    CommandRegistry::new().unwrap()
}

fn run(line: &str, state: &mut SessionState) -> Option<Command> {
    registry().parse(line, state)
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn registry_order_is_declaration_order() {
    let kinds: Vec<_> = registry().kinds().collect();
    assert_eq!(
        kinds,
        vec![
            CommandKind::Help,
            CommandKind::Quit,
            CommandKind::SetUsername,
            CommandKind::Debug,
        ]
    );
}

#[test]
fn messages_are_not_commands() {
    let mut state = SessionState::new();
    assert_eq!(run("hello /quit", &mut state), None);
    assert_eq!(run(" /quit", &mut state), None);
    assert_eq!(run("/", &mut state), None);
    assert_eq!(run("/123", &mut state), None);
}

#[test]
fn known_commands_resolve() {
    let mut state = SessionState::new();
    assert_eq!(run("/help", &mut state), Some(Command::Help));
    assert_eq!(run("/quit", &mut state), Some(Command::Quit));
    assert_eq!(run("/quit  ", &mut state), Some(Command::Quit));
}

#[test]
fn unknown_command_shows_help() {
    let mut state = SessionState::new();
    assert_eq!(run("/foo", &mut state), Some(Command::Help));
    assert_eq!(run("/quitnow", &mut state), Some(Command::Help));
    assert_eq!(run("/help me", &mut state), Some(Command::Help));
}

#[test]
fn command_names_are_case_sensitive() {
    let mut state = SessionState::new();
    assert_eq!(run("/QUIT", &mut state), Some(Command::Help));
    assert_eq!(run("/setusername bob", &mut state), Some(Command::Help));
    assert_eq!(state.username(), "username");
}

// =============================================================================
// SetUsername
// =============================================================================

#[test]
fn set_username_changes_state() {
    let mut state = SessionState::new();
    let command = run("/setUsername alice", &mut state).unwrap();

    assert_eq!(command, Command::SetUsername { succeeded: true });
    assert_eq!(command.message(), "Username successfully changed\n");
    assert_eq!(state.username(), "alice");
}

#[test]
fn malformed_set_username_falls_back_to_help() {
    let mut state = SessionState::with_username("alice");

    for line in ["/setUsername", "/setUsername ", "/setUsername a b"] {
        assert_eq!(run(line, &mut state), Some(Command::Help), "{line:?}");
    }
    assert_eq!(state.username(), "alice");
}

#[test]
fn failure_message_points_at_help() {
    let failed = Command::SetUsername { succeeded: false };
    assert_eq!(failed.kind(), CommandKind::SetUsername);
    assert_eq!(
        failed.message(),
        "Username change failed. For help, enter /help\n"
    );
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn debug_toggles() {
    let mut state = SessionState::new();

    let first = run("/debug", &mut state).unwrap();
    assert_eq!(first.message(), "Debug enabled\n");
    assert!(state.debug_enabled());

    let second = run("/debug", &mut state).unwrap();
    assert_eq!(second.message(), "Debug disabled\n");
    assert!(!state.debug_enabled());
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn help_lists_every_command() {
    let help = Command::Help.message();
    for kind in CommandKind::ALL {
        assert!(help.contains(&kind.to_string()), "missing {kind}");
    }
}

#[test]
fn only_quit_stops() {
    assert!(Command::Quit.should_quit());
    assert_eq!(Command::Quit.message(), "Goodbye!\n");
    assert!(!Command::Help.should_quit());
    assert!(!Command::Debug { enabled: true }.should_quit());
}
