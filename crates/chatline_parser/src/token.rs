//! Token variants extracted from chat messages.
//!
//! Each [`TokenKind`] owns a regex fragment and a tag. The token parser wraps
//! every fragment in a named group named after the tag, so the group that
//! fired tells it which variant to instantiate.

use std::fmt;

use chatline_foundation::{Error, Result};
use tracing::debug;

use crate::fetch::TitleFetcher;

/// The closed set of token variants, in alternation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `@name`
    Mention,
    /// `(code)`
    Emoticon,
    /// `http://`, `https://`, or `ftp://` URL
    Link,
}

impl TokenKind {
    /// All variants. Earlier variants win when two branches match at the
    /// same position.
    pub const ALL: [Self; 3] = [Self::Mention, Self::Emoticon, Self::Link];

    /// Returns the report tag (also the capture group name).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Mention => "mentions",
            Self::Emoticon => "emoticons",
            Self::Link => "links",
        }
    }

    /// Returns the regex fragment matching this variant.
    ///
    /// Fragments contain no capturing groups of their own.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Mention => r"@[A-Za-z0-9_]+",
            Self::Emoticon => r"\([A-Za-z0-9_]{1,15}\)",
            Self::Link => r"(?:https?|ftp)://[^\s/$.?#][^\s]*",
        }
    }

    /// Looks up a variant by its report tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Builds a token of this kind from the text its group captured.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a well-formed capture for this
    /// kind, or if a link could not be fetched at all.
    pub fn instantiate(self, raw: &str, fetcher: &dyn TitleFetcher) -> Result<Token> {
        match self {
            Self::Mention => Token::mention(raw),
            Self::Emoticon => Token::emoticon(raw),
            Self::Link => Token::link(raw, fetcher),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A structured unit of meaning extracted from one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A mention of another user.
    Mention {
        /// The name without the leading `@`.
        username: String,
    },
    /// An emoticon code.
    Emoticon {
        /// The code without the surrounding parentheses.
        code: String,
    },
    /// A link and the title of the page it points to.
    Link {
        /// The URL exactly as matched.
        url: String,
        /// The page title, empty if the page timed out or had none.
        title: String,
    },
}

impl Token {
    /// Builds a mention from `@name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text has no leading `@` or no name.
    pub fn mention(raw: &str) -> Result<Self> {
        match raw.strip_prefix('@') {
            Some(name) if !name.is_empty() => Ok(Self::Mention {
                username: name.to_string(),
            }),
            _ => Err(Error::invalid_token(
                TokenKind::Mention.tag(),
                format!("expected @name, got {raw:?}"),
            )),
        }
    }

    /// Builds an emoticon from `(code)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not wrapped in parentheses.
    pub fn emoticon(raw: &str) -> Result<Self> {
        match raw.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
            Some(code) if !code.is_empty() => Ok(Self::Emoticon {
                code: code.to_string(),
            }),
            _ => Err(Error::invalid_token(
                TokenKind::Emoticon.tag(),
                format!("expected (code), got {raw:?}"),
            )),
        }
    }

    /// Builds a link, fetching the page title through `fetcher`.
    ///
    /// Timeouts, malformed documents, and unsupported schemes keep the
    /// link with an empty title.
    ///
    /// # Errors
    ///
    /// Returns an error if the page could not be fetched at all.
    pub fn link(raw: &str, fetcher: &dyn TitleFetcher) -> Result<Self> {
        let title = match fetcher.fetch_title(raw) {
            Ok(title) => title,
            Err(err) if err.is_recoverable() => {
                debug!(url = raw, error = %err, "keeping link without title");
                String::new()
            }
            Err(err) => return Err(Error::fetch(err.to_string())),
        };

        Ok(Self::Link {
            url: raw.to_string(),
            title,
        })
    }

    /// Returns the variant of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Mention { .. } => TokenKind::Mention,
            Self::Emoticon { .. } => TokenKind::Emoticon,
            Self::Link { .. } => TokenKind::Link,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mention { username } => f.write_str(username),
            Self::Emoticon { code } => f.write_str(code),
            Self::Link { url, title } => {
                write!(f, "{{ \"url\": \"{url}\", \"title\": \"{title}\" }}")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        match self {
            Self::Mention { username } => serializer.serialize_str(username),
            Self::Emoticon { code } => serializer.serialize_str(code),
            Self::Link { url, title } => {
                let mut link = serializer.serialize_struct("Link", 2)?;
                link.serialize_field("url", url)?;
                link.serialize_field("title", title)?;
                link.end()
            }
        }
    }
}
