//! Detox CLI - runs end-to-end test suites through mocha or jest
//!
//! The `test` command merges command-line flags with the `detox` section of
//! the project's package.json and launches the configured test runner.

pub mod cli;
pub mod commands;
pub mod common;
pub mod device_registry;
pub mod options;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use options::{ResolvedOptions, Source};
pub use runner::{CommandDescriptor, TestRunner};
