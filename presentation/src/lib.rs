//! Presentation layer for model-arena
//!
//! This crate contains the HTTP API, CLI definitions, output formatters,
//! and progress reporters.

pub mod api;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use api::{ApiError, AppState, router};
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
