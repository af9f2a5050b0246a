//! The main console loop.

use crate::config::ConsoleConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::render;
use crate::session::{LineOutcome, Session};
use chatline_foundation::{Error, Result};
use chatline_parser::TokenReport;
use std::io::{self, Stdout, Write};
use tracing::{error, warn};

/// The interactive chat console.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Session state (username, debug flag, registries).
    session: Session,

    /// Where command messages and reports are written.
    out: W,

    /// Prompt, banner, and output format settings.
    config: ConsoleConfig,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a console with the rustyline editor, writing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or session fails to initialize.
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        let session = Session::new(config)?;
        Ok(Self::with_editor(editor, session, config))
    }
}

impl<E: LineEditor> Repl<E, Stdout> {
    /// Creates a console with the given editor and session, writing to stdout.
    pub fn with_editor(editor: E, session: Session, config: &ConsoleConfig) -> Self {
        let mut editor = editor;
        editor.set_commands(
            session
                .command_kinds()
                .map(|kind| kind.name().to_string())
                .collect(),
        );

        Self {
            editor,
            session,
            out: io::stdout(),
            config: config.clone(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects console output to `out`.
    #[must_use]
    pub fn with_output<W2: Write>(self, out: W2) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            session: self.session,
            out,
            config: self.config,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Returns the prompt for the current username.
    #[must_use]
    pub fn prompt(&self) -> String {
        self.config.prompt_for(self.session.state().username())
    }

    /// Runs the console loop until `/quit`, end of input, or a stream error.
    ///
    /// A stream error is reported and ends the loop like end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parting message cannot be written.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner()?;
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_fatal() => {
                    error!(error = %e, "console stream failed");
                    eprintln!("\x1b[31mError: {e}\x1b[0m");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "line failed");
                    eprintln!("\x1b[31mError: {e}\x1b[0m");
                }
            }
        }

        self.emit("Logged out.\n")
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let prompt = self.prompt();
        let line = match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
            ReadResult::Undecodable(reason) => {
                warn!(%reason, "skipping undecodable line");
                eprintln!("\x1b[33mSkipped a line that is not valid UTF-8\x1b[0m");
                return Ok(true);
            }
        };

        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        self.eval(&line)
    }

    /// Processes one line and prints its result.
    ///
    /// Returns `Ok(false)` if the line ended the console.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written or the report
    /// cannot be rendered.
    pub fn eval(&mut self, line: &str) -> Result<bool> {
        match self.session.process_line(line) {
            LineOutcome::Skipped => Ok(true),
            LineOutcome::Command(command) => {
                self.emit(command.message())?;
                Ok(!command.should_quit())
            }
            LineOutcome::Report(report) => {
                self.print_rejections(&report);
                let rendered = render(&report, self.config.format)?;
                if !rendered.is_empty() {
                    self.emit(&rendered)?;
                }
                Ok(true)
            }
        }
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::output(e.to_string()))
    }

    /// Surfaces discarded tokens on stderr when debug is enabled.
    fn print_rejections(&self, report: &TokenReport) {
        if !self.session.state().debug_enabled() {
            return;
        }

        for rejection in report.rejections() {
            eprintln!(
                "\x1b[33mdiscarded {} token {:?}: {}\x1b[0m",
                rejection.kind, rejection.raw, rejection.error
            );
            if let Some(context) = &rejection.error.context {
                eprint!("{context}");
            }
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) -> Result<()> {
        let banner = format!(
            "Chatline v{}\nType a message to extract mentions, emoticons, and links. Enter /help for commands.\n\n",
            env!("CARGO_PKG_VERSION")
        );
        self.emit(&banner)
    }
}
