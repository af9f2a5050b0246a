//! Core types for Chatline.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`SessionState`] - The username and debug flag owned by one console

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod state;

pub use error::{Error, ErrorContext, ErrorKind};
pub use state::{DEFAULT_USERNAME, SessionState};

/// Result type alias using Chatline's Error.
pub type Result<T> = std::result::Result<T, Error>;
