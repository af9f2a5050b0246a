//! REPL, CLI, and report rendering for Chatline.
//!
//! This crate provides:
//! - [`Repl`] - Interactive chat console
//! - [`Session`] - Line classification against the command and token registries
//! - [`ConsoleConfig`] - Console settings parsed from the command line
//! - Report rendering in the indented and JSON layouts

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod render;
pub mod repl;
pub mod session;

pub use config::{ConsoleConfig, OutputFormat};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use render::{render, render_json, render_pretty};
pub use repl::Repl;
pub use session::{LineOutcome, Session};
