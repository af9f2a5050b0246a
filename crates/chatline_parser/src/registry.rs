//! Command registry and dispatch.

use chatline_foundation::{Error, Result, SessionState};
use regex::Regex;
use tracing::debug;

use crate::command::{Command, CommandKind};

/// A line that starts with a slash followed by letters is treated as a
/// command attempt.
pub const COMMAND_PREFIX: &str = r"^/[a-zA-Z]+";

/// Registry of command patterns, tried in declaration order.
pub struct CommandRegistry {
    prefix: Regex,
    commands: Vec<(CommandKind, Regex)>,
}

impl CommandRegistry {
    /// Creates a registry with every command registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a command pattern fails to compile.
    pub fn new() -> Result<Self> {
        let prefix = Regex::new(COMMAND_PREFIX).map_err(|e| Error::pattern(e.to_string()))?;
        let commands = CommandKind::ALL
            .into_iter()
            .map(|kind| {
                Regex::new(kind.pattern())
                    .map(|pattern| (kind, pattern))
                    .map_err(|e| Error::pattern(format!("{kind}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { prefix, commands })
    }

    /// Returns true if `line` is shaped like a command.
    #[must_use]
    pub fn looks_like_command(&self, line: &str) -> bool {
        self.prefix.is_match(line)
    }

    /// Returns the registered command kinds in resolution order.
    pub fn kinds(&self) -> impl Iterator<Item = CommandKind> + '_ {
        self.commands.iter().map(|(kind, _)| *kind)
    }

    /// Parses `line` as a command.
    ///
    /// Returns `None` if the line is not command-shaped. A command-shaped
    /// line that matches no pattern produces [`Command::Help`].
    pub fn parse(&self, line: &str, state: &mut SessionState) -> Option<Command> {
        if !self.looks_like_command(line) {
            return None;
        }

        for (kind, pattern) in &self.commands {
            if pattern.is_match(line) {
                debug!(command = %kind, "dispatching command");
                return Some(kind.init(pattern, line, state));
            }
        }

        debug!(line, "unrecognized command, showing help");
        Some(Command::Help)
    }
}
