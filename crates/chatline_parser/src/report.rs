//! Tokens of one message, grouped by tag.

use chatline_foundation::Error;

use crate::token::{Token, TokenKind};

/// A token the parser matched but could not construct.
#[derive(Debug)]
pub struct Rejection {
    /// The variant whose group captured the text.
    pub kind: TokenKind,
    /// The captured text.
    pub raw: String,
    /// Why construction failed.
    pub error: Error,
}

/// Mapping from tag to the tokens found under it.
///
/// Tags appear in the order their first token was discovered, and tokens
/// keep left-to-right order within a tag. Tags with no tokens are absent.
#[derive(Debug, Default)]
pub struct TokenReport {
    entries: Vec<(TokenKind, Vec<Token>)>,
    rejections: Vec<Rejection>,
}

impl TokenReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token under its tag.
    pub fn push(&mut self, token: Token) {
        let kind = token.kind();
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, tokens)) => tokens.push(token),
            None => self.entries.push((kind, vec![token])),
        }
    }

    /// Records a token that was matched but discarded.
    pub fn reject(&mut self, rejection: Rejection) {
        self.rejections.push(rejection);
    }

    /// Returns the tokens found for `kind`.
    #[must_use]
    pub fn get(&self, kind: TokenKind) -> Option<&[Token]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, tokens)| tokens.as_slice())
    }

    /// Returns the tokens found under the given tag name.
    #[must_use]
    pub fn get_tag(&self, tag: &str) -> Option<&[Token]> {
        TokenKind::from_tag(tag).and_then(|kind| self.get(kind))
    }

    /// Iterates over `(kind, tokens)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, &[Token])> {
        self.entries
            .iter()
            .map(|(kind, tokens)| (*kind, tokens.as_slice()))
    }

    /// Returns the tags present, in discovery order.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(kind, _)| kind.tag()).collect()
    }

    /// Returns true if no tokens were kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of tags present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total number of tokens kept.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.entries.iter().map(|(_, tokens)| tokens.len()).sum()
    }

    /// Returns the tokens that were matched but discarded.
    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, tokens) in &self.entries {
            map.serialize_entry(kind.tag(), tokens)?;
        }
        map.end()
    }
}
