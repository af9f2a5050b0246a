//! Message tokenization.
//!
//! Scans a chat message with one combined pattern and builds a
//! [`TokenReport`].

use chatline_foundation::{Error, ErrorContext, Result};
use regex::Regex;
use tracing::{debug, trace};

use crate::fetch::TitleFetcher;
use crate::report::{Rejection, TokenReport};
use crate::token::TokenKind;

/// Builds the alternation of every token fragment, each wrapped in a named
/// group named after its tag.
#[must_use]
pub fn combined_pattern() -> String {
    TokenKind::ALL
        .iter()
        .map(|kind| format!("(?P<{}>{})", kind.tag(), kind.pattern()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Extracts tokens from chat messages.
pub struct TokenParser {
    pattern: Regex,
    fetcher: Box<dyn TitleFetcher>,
}

impl TokenParser {
    /// Creates a parser that resolves link titles through `fetcher`.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined pattern fails to compile.
    pub fn new(fetcher: impl TitleFetcher + 'static) -> Result<Self> {
        Self::with_boxed_fetcher(Box::new(fetcher))
    }

    /// Creates a parser from an already boxed fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined pattern fails to compile.
    pub fn with_boxed_fetcher(fetcher: Box<dyn TitleFetcher>) -> Result<Self> {
        let source = combined_pattern();
        let pattern = Regex::new(&source).map_err(|e| Error::pattern(e.to_string()))?;
        Ok(Self { pattern, fetcher })
    }

    /// Scans `line` left to right and groups every token found by tag.
    ///
    /// Tokens that fail to construct are left out of the mapping and
    /// recorded as rejections; they never stop the scan.
    #[must_use]
    pub fn parse(&self, line: &str) -> TokenReport {
        let mut report = TokenReport::new();

        for captures in self.pattern.captures_iter(line) {
            let Some((kind, matched)) = TokenKind::ALL
                .into_iter()
                .find_map(|kind| captures.name(kind.tag()).map(|m| (kind, m)))
            else {
                continue;
            };

            let raw = matched.as_str();
            trace!(tag = kind.tag(), raw, offset = matched.start(), "token matched");

            match kind.instantiate(raw, self.fetcher.as_ref()) {
                Ok(token) => report.push(token),
                Err(error) => {
                    debug!(tag = kind.tag(), raw, %error, "discarding token");
                    report.reject(Rejection {
                        kind,
                        raw: raw.to_string(),
                        error: error.with_context(
                            ErrorContext::new()
                                .with_input(line)
                                .with_offset(matched.start())
                                .with_frame(format!("{kind} token")),
                        ),
                    });
                }
            }
        }

        report
    }
}
