//! Per-console session state.
//!
//! Lives for the life of the console and is mutated only by commands, between
//! fully processed lines.

/// Username shown in the prompt before any `/setUsername`.
pub const DEFAULT_USERNAME: &str = "username";

/// Mutable state shared by the command handlers of one console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    username: String,
    debug: bool,
}

impl SessionState {
    /// Creates a state with the default username and debug disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_username(DEFAULT_USERNAME)
    }

    /// Creates a state with the given username and debug disabled.
    #[must_use]
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            debug: false,
        }
    }

    /// Returns the active username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Replaces the active username.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Returns true if internal failures should be surfaced.
    #[must_use]
    pub const fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Sets the debug flag.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Flips the debug flag and returns the new value.
    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
