//! Integration tests for Layer 1: Parser
//!
//! Tests for the token parser, the command registry, and link titles.

mod command_tests;
mod property_tests;
