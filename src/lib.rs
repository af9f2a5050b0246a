//! Chatline - line-based chat console
//!
//! This crate re-exports all layers of the Chatline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: chatline_runtime     REPL, CLI, report rendering
//! Layer 1: chatline_parser      Token/command registries, link titles
//! Layer 0: chatline_foundation  Core types (Error, SessionState)
//! ```

pub use chatline_foundation as foundation;
pub use chatline_parser as parser;
pub use chatline_runtime as runtime;
