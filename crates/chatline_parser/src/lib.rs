//! Token and command recognition for chat messages.
//!
//! This crate classifies one line of console input either as a command or
//! as a chat message, and extracts structured tokens from messages.
//!
//! # Architecture
//!
//! ```text
//! "hello @bob (smile) http://example.com"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → "/word..." ? Help / Quit / SetUsername / Debug
//! │ REGISTRY        │     (unknown "/word" falls back to Help)
//! └─────────────────┘
//!          │ not a command
//!          ▼
//! ┌─────────────────┐
//! │ TOKEN           │  → (?P<mentions>…)|(?P<emoticons>…)|(?P<links>…)
//! │ PARSER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TOKEN INIT      │  → strip sigils, fetch link titles
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REPORT          │  → { mentions: [bob], emoticons: [smile], links: [...] }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`] - Token variants and their patterns
//! - [`tokenizer`] - Combined-pattern scan producing a report
//! - [`report`] - Tokens grouped by tag in discovery order
//! - [`fetch`] - Link title fetching
//! - [`command`] - Command variants and their effects
//! - [`registry`] - Command detection and dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod fetch;
pub mod registry;
pub mod report;
pub mod token;
pub mod tokenizer;

// Re-export main types for convenience
pub use command::{Command, CommandKind};
pub use fetch::{FetchError, HttpTitleFetcher, TitleFetcher};
pub use registry::CommandRegistry;
pub use report::{Rejection, TokenReport};
pub use token::{Token, TokenKind};
pub use tokenizer::TokenParser;
