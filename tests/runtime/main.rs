//! Integration tests for Layer 2: Runtime
//!
//! Tests for the console loop, line classification, and report rendering.

mod render_tests;
