//! Integration tests for Error types
//!
//! Tests error construction, display, context, and fatality.

use chatline_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_token() {
    let err = Error::invalid_token("mentions", "expected @name");
    assert!(matches!(
        &err.kind,
        ErrorKind::InvalidToken { tag, .. } if tag == "mentions"
    ));
    assert_eq!(format!("{err}"), "invalid mentions token: expected @name");
}

#[test]
fn error_fetch() {
    let err = Error::fetch("connection refused");
    assert!(matches!(err.kind, ErrorKind::Fetch(_)));
    assert!(format!("{err}").contains("connection refused"));
}

#[test]
fn error_pattern() {
    let err = Error::pattern("unclosed group");
    assert!(matches!(err.kind, ErrorKind::Pattern(_)));
    assert!(format!("{err}").starts_with("invalid pattern"));
}

#[test]
fn error_config() {
    let err = Error::config("unknown option: --frobnicate");
    assert!(matches!(err.kind, ErrorKind::Config(_)));
    assert!(format!("{err}").contains("--frobnicate"));
}

#[test]
fn error_internal() {
    let err = Error::new(ErrorKind::Internal("unreachable".to_string()));
    assert_eq!(format!("{err}"), "internal error: unreachable");
}

// =============================================================================
// Fatality
// =============================================================================

#[test]
fn stream_errors_are_fatal() {
    assert!(Error::input("terminal closed").is_fatal());
    assert!(Error::output("broken pipe").is_fatal());
}

#[test]
fn token_and_fetch_errors_are_not_fatal() {
    assert!(!Error::invalid_token("links", "bad").is_fatal());
    assert!(!Error::fetch("404").is_fatal());
    assert!(!Error::config("bad").is_fatal());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::fetch("timeout");
    assert!(err.context.is_none());
}

#[test]
fn error_with_context() {
    let ctx = ErrorContext::new()
        .with_input("see http://x.invalid")
        .with_offset(4);
    let err = Error::fetch("dns failure").with_context(ctx);

    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.input.as_deref(), Some("see http://x.invalid"));
    assert_eq!(ctx.offset, Some(4));
}

#[test]
fn context_display_lists_frames() {
    let ctx = ErrorContext::new()
        .with_input("@")
        .with_offset(0)
        .with_frame("mentions")
        .with_frame("message");

    let shown = ctx.to_string();
    assert!(shown.starts_with("in \"@\" at byte 0\n"));
    assert!(shown.contains("  in mentions\n"));
    assert!(shown.contains("  in message\n"));
}

#[test]
fn empty_context_displays_nothing() {
    assert_eq!(ErrorContext::new().to_string(), "");
}

// =============================================================================
// Error Trait
// =============================================================================

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::fetch("x"));
}

#[test]
fn error_debug_format() {
    let err = Error::pattern("x");
    assert!(format!("{err:?}").contains("Pattern"));
}
