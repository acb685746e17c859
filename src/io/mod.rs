//! Command-line driver, output and ambient services

/// Command-line parsing and pattern generation driver
pub mod cli;
/// Runtime constants and defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Logging setup
pub mod logging;
/// Progress bars for multi-pattern runs
pub mod progress;
/// Text rendering of boards and entropy maps
pub mod render;
