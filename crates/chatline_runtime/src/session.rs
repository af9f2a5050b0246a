//! Session state for the console.
//!
//! A [`Session`] owns the mutable [`SessionState`] and both registries, and
//! turns one input line into a [`LineOutcome`].

use chatline_foundation::{Result, SessionState};
use chatline_parser::{
    Command, CommandKind, CommandRegistry, HttpTitleFetcher, TitleFetcher, TokenParser,
    TokenReport,
};
use tracing::debug;

use crate::config::ConsoleConfig;

/// What one input line produced.
#[derive(Debug)]
pub enum LineOutcome {
    /// The line was blank and ignored.
    Skipped,
    /// The line was a command.
    Command(Command),
    /// The line was a chat message.
    Report(TokenReport),
}

/// Session state for an interactive console.
pub struct Session {
    state: SessionState,
    tokens: TokenParser,
    commands: CommandRegistry,
}

impl Session {
    /// Creates a session that fetches link titles over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or a registry pattern fails to
    /// initialize.
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let fetcher = HttpTitleFetcher::with_timeouts(config.connect_timeout, config.read_timeout)?;
        Self::with_fetcher(config, fetcher)
    }

    /// Creates a session that resolves link titles through `fetcher`.
    ///
    /// # Errors
    ///
    /// Returns an error if a registry pattern fails to compile.
    pub fn with_fetcher(config: &ConsoleConfig, fetcher: impl TitleFetcher + 'static) -> Result<Self> {
        let mut state = SessionState::with_username(config.username.clone());
        state.set_debug(config.debug);

        Ok(Self {
            state,
            tokens: TokenParser::new(fetcher)?,
            commands: CommandRegistry::new()?,
        })
    }

    /// Returns the session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns a mutable reference to the session state.
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Returns the registered command kinds in resolution order.
    pub fn command_kinds(&self) -> impl Iterator<Item = CommandKind> + '_ {
        self.commands.kinds()
    }

    /// Classifies and processes one line.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        if line.trim().is_empty() {
            return LineOutcome::Skipped;
        }

        if let Some(command) = self.commands.parse(line, &mut self.state) {
            return LineOutcome::Command(command);
        }

        let report = self.tokens.parse(line);
        debug!(
            tags = report.len(),
            tokens = report.token_count(),
            rejected = report.rejections().len(),
            "message parsed"
        );
        LineOutcome::Report(report)
    }
}
