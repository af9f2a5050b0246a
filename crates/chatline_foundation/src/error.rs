//! Error types for the Chatline system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Chatline operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid token error.
    #[must_use]
    pub fn invalid_token(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken {
            tag: tag.into(),
            reason: reason.into(),
        })
    }

    /// Creates a hard link fetch error.
    #[must_use]
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fetch(message.into()))
    }

    /// Creates a pattern compilation error.
    #[must_use]
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Pattern(message.into()))
    }

    /// Creates an input stream error.
    #[must_use]
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input(message.into()))
    }

    /// Creates an output stream error.
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Output(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if this error ends the console loop.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::Input(_) | ErrorKind::Output(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A token could not be constructed from its captured text.
    #[error("invalid {tag} token: {reason}")]
    InvalidToken {
        /// The tag of the token variant that rejected the text.
        tag: String,
        /// Why the token was rejected.
        reason: String,
    },

    /// A link could not be fetched at all (connection, DNS, HTTP status).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// A registry pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(String),

    /// Reading from the input stream failed.
    #[error("input error: {0}")]
    Input(String),

    /// Writing to the output stream failed.
    #[error("output error: {0}")]
    Output(String),

    /// Invalid command-line or console configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The raw text being processed when the error occurred.
    pub input: Option<String>,
    /// Byte offset of the failing match within the input.
    pub offset: Option<usize>,
    /// Processing stages the error passed through, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the byte offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a stage frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(input) = &self.input {
            write!(f, "in {input:?}")?;
            if let Some(offset) = self.offset {
                write!(f, " at byte {offset}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
