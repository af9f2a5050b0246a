//! Console commands.
//!
//! A command is a slash-prefixed line that changes session behavior instead
//! of being chat content. Each [`CommandKind`] owns a full-line pattern; the
//! [`crate::CommandRegistry`] picks the kind and [`CommandKind::init`]
//! produces the [`Command`].

use std::fmt;

use chatline_foundation::SessionState;
use regex::Regex;
use tracing::debug;

const HELP_MESSAGE: &str = "Parse chat input by simply typing a message.\n\n\
Commands: \n    \
/help - display this message\n    \
/setUsername [username] - set the username for the input prompt\n    \
/debug - toggle diagnostic output for discarded tokens\n    \
/quit - quit this program\n\n";

/// The closed set of command variants, in resolution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// `/setUsername <name>`
    SetUsername,
    /// `/debug`
    Debug,
}

impl CommandKind {
    /// All variants. The first one whose pattern matches a line wins.
    pub const ALL: [Self; 4] = [Self::Help, Self::Quit, Self::SetUsername, Self::Debug];

    /// Returns the command name as typed after the slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::SetUsername => "setUsername",
            Self::Debug => "debug",
        }
    }

    /// Returns the pattern a whole line must match to select this command.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Help => r"^/help\s*$",
            Self::Quit => r"^/quit\s*$",
            Self::SetUsername => r"^/setUsername (\S+)$",
            Self::Debug => r"^/debug\s*$",
        }
    }

    /// Builds the command for `line`, applying its effect to `state`.
    ///
    /// `pattern` must be the compiled form of [`Self::pattern`].
    pub fn init(self, pattern: &Regex, line: &str, state: &mut SessionState) -> Command {
        match self {
            Self::Help => Command::Help,
            Self::Quit => Command::Quit,
            Self::SetUsername => {
                let name = pattern
                    .captures(line)
                    .and_then(|captures| captures.get(1))
                    .map(|m| m.as_str());
                match name {
                    Some(name) => {
                        debug!(username = name, "username changed");
                        state.set_username(name);
                        Command::SetUsername { succeeded: true }
                    }
                    None => Command::SetUsername { succeeded: false },
                }
            }
            Self::Debug => Command::Debug {
                enabled: state.toggle_debug(),
            },
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// The outcome of one command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show usage.
    Help,
    /// End the console.
    Quit,
    /// Change the prompt username.
    SetUsername {
        /// Whether a username was captured and applied.
        succeeded: bool,
    },
    /// Toggle diagnostic output.
    Debug {
        /// The debug flag after toggling.
        enabled: bool,
    },
}

impl Command {
    /// Returns the variant of this command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Help => CommandKind::Help,
            Self::Quit => CommandKind::Quit,
            Self::SetUsername { .. } => CommandKind::SetUsername,
            Self::Debug { .. } => CommandKind::Debug,
        }
    }

    /// Returns the text to print, including its trailing newline.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Help => HELP_MESSAGE,
            Self::Quit => "Goodbye!\n",
            Self::SetUsername { succeeded: true } => "Username successfully changed\n",
            Self::SetUsername { succeeded: false } => {
                "Username change failed. For help, enter /help\n"
            }
            Self::Debug { enabled: true } => "Debug enabled\n",
            Self::Debug { enabled: false } => "Debug disabled\n",
        }
    }

    /// Returns true if the console should stop after this command.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
