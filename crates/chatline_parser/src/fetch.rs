//! Link title fetching.
//!
//! The token parser only depends on [`TitleFetcher`]; [`HttpTitleFetcher`]
//! is the blocking HTTP implementation used by the console.

use std::sync::LazyLock;
use std::time::Duration;

use chatline_foundation::{Error, Result};
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::debug;

/// Default time allowed to establish a connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time allowed to read the response once connected.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("title regex should compile")
});

/// Why a link title could not be fetched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connecting or reading took longer than allowed.
    #[error("timed out fetching {url}")]
    Timeout {
        /// The link being fetched.
        url: String,
    },

    /// The response was not a readable HTML document.
    #[error("malformed document at {url}: {reason}")]
    Malformed {
        /// The link being fetched.
        url: String,
        /// What was wrong with the document.
        reason: String,
    },

    /// The fetcher cannot speak the link's scheme.
    #[error("unsupported scheme for {url}")]
    Unsupported {
        /// The link being fetched.
        url: String,
    },

    /// Any other I/O failure: DNS, refused connection, HTTP error status.
    #[error("could not fetch {url}: {reason}")]
    Io {
        /// The link being fetched.
        url: String,
        /// The underlying failure.
        reason: String,
    },
}

impl FetchError {
    /// Returns true if the link should be kept with an empty title.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Resolves the title of the page a link points to.
pub trait TitleFetcher {
    /// Fetches `url` and returns its title.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing how the fetch failed.
    fn fetch_title(&self, url: &str) -> std::result::Result<String, FetchError>;
}

impl<F> TitleFetcher for F
where
    F: Fn(&str) -> std::result::Result<String, FetchError>,
{
    fn fetch_title(&self, url: &str) -> std::result::Result<String, FetchError> {
        self(url)
    }
}

/// Fetches titles over HTTP(S) with a blocking client.
pub struct HttpTitleFetcher {
    client: Client,
}

impl HttpTitleFetcher {
    /// Creates a fetcher with the default 10 second connect and read timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_timeouts(CONNECT_TIMEOUT, READ_TIMEOUT)
    }

    /// Creates a fetcher with the given timeouts.
    ///
    /// The whole request must finish within `connect + read`, saturating
    /// at [`Duration::MAX`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_timeouts(connect: Duration, read: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect)
            .timeout(connect.saturating_add(read))
            .user_agent(concat!("chatline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::fetch(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client))
    }

    /// Creates a fetcher around a preconfigured client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl TitleFetcher for HttpTitleFetcher {
    fn fetch_title(&self, url: &str) -> std::result::Result<String, FetchError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FetchError::Unsupported {
                url: url.to_string(),
            });
        }

        debug!(url, "fetching link title");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| classify(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Io {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !is_markup(content_type) {
                return Err(FetchError::Malformed {
                    url: url.to_string(),
                    reason: format!("content type {content_type}"),
                });
            }
        }

        let body = response.text().map_err(|e| classify(url, &e))?;
        extract_title(&body).ok_or_else(|| FetchError::Malformed {
            url: url.to_string(),
            reason: "no <title> element".to_string(),
        })
    }
}

fn classify(url: &str, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_decode() {
        FetchError::Malformed {
            url: url.to_string(),
            reason: err.to_string(),
        }
    } else {
        FetchError::Io {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

fn is_markup(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime.contains("html") || mime.contains("xml")
}

/// Extracts the text of the first `<title>` element of an HTML document.
///
/// Character references are decoded, then whitespace runs collapse to
/// single spaces. Returns `None` if the document has no title.
#[must_use]
pub fn extract_title(document: &str) -> Option<String> {
    let raw = TITLE_RE.captures(document)?.get(1)?.as_str();
    let decoded = html_escape::decode_html_entities(raw);
    Some(decoded.split_whitespace().collect::<Vec<_>>().join(" "))
}
