//! Input highlighting for the console.

use std::borrow::Cow;

use chatline_foundation::{Error, Result};
use chatline_parser::TokenKind;
use chatline_parser::registry::COMMAND_PREFIX;
use chatline_parser::tokenizer::combined_pattern;
use regex::Regex;

const RESET: &str = "\x1b[0m";

/// Colours commands and tokens in the line being typed.
pub struct ChatHighlighter {
    tokens: Regex,
    command: Regex,
}

impl ChatHighlighter {
    /// Creates a new highlighter using the parser's patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let tokens = Regex::new(&combined_pattern()).map_err(|e| Error::pattern(e.to_string()))?;
        let command = Regex::new(COMMAND_PREFIX).map_err(|e| Error::pattern(e.to_string()))?;
        Ok(Self { tokens, command })
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if let Some(m) = self.command.find(line) {
            return Cow::Owned(format!(
                "\x1b[1;36m{}{RESET}{}",
                m.as_str(),
                &line[m.end()..]
            ));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut last = 0;

        for captures in self.tokens.captures_iter(line) {
            let Some((kind, m)) = TokenKind::ALL
                .into_iter()
                .find_map(|kind| captures.name(kind.tag()).map(|m| (kind, m)))
            else {
                continue;
            };

            result.push_str(&line[last..m.start()]);
            result.push_str(colour(kind));
            result.push_str(m.as_str());
            result.push_str(RESET);
            last = m.end();
        }

        if last == 0 {
            return Cow::Borrowed(line);
        }

        result.push_str(&line[last..]);
        Cow::Owned(result)
    }
}

const fn colour(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Mention => "\x1b[34m",   // blue
        TokenKind::Emoticon => "\x1b[33m",  // yellow
        TokenKind::Link => "\x1b[4;35m",    // underlined magenta
    }
}
