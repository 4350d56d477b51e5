//! Core application functionality
//!
//! This module contains the application layer around the converter:
//! - CLI parsing and validation
//! - User configuration file
//! - Batch conversion and output
//! - Process-level error handling

pub mod batch;
pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use batch::{convert_batch, join_formulas, GlyphOutcome, GlyphReport};
pub use cli::{CliArgs, OutputFormat};
pub use config_file::ConfigFile;
pub use runner::run_app;
