//! Configuration for the chat console.

use std::time::Duration;

use chatline_foundation::DEFAULT_USERNAME;
use chatline_parser::fetch::{CONNECT_TIMEOUT, READ_TIMEOUT};

/// How token reports are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented report with bare mention and emoticon payloads.
    #[default]
    Pretty,
    /// Strict JSON.
    Json,
}

/// Configuration for one console session.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Username shown in the prompt until `/setUsername` changes it.
    pub username: String,

    /// Text appended to the username to form the prompt.
    pub prompt_suffix: String,

    /// Time allowed to connect when fetching a link title.
    pub connect_timeout: Duration,

    /// Time allowed to read a link's page once connected.
    pub read_timeout: Duration,

    /// Whether rejected tokens are reported on stderr from the start.
    pub debug: bool,

    /// Whether to print the welcome banner.
    pub show_banner: bool,

    /// Report output format.
    pub format: OutputFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            prompt_suffix: " > ".to_string(),
            connect_timeout: CONNECT_TIMEOUT,
            read_timeout: READ_TIMEOUT,
            debug: false,
            show_banner: true,
            format: OutputFormat::Pretty,
        }
    }
}

impl ConsoleConfig {
    /// Builder method to set the initial username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Builder method to set the prompt suffix.
    #[must_use]
    pub fn with_prompt_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.prompt_suffix = suffix.into();
        self
    }

    /// Builder method to set both link timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// Builder method to set the initial debug flag.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the prompt for the given username.
    #[must_use]
    pub fn prompt_for(&self, username: &str) -> String {
        format!("{username}{}", self.prompt_suffix)
    }
}
