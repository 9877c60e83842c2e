//! Test modules for the notes server.
//!
//! This module contains crate-level tests that cut across components:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Test fixtures and utilities shared by the above


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{note_content_strategy, note_name_strategy, TestFixture};
