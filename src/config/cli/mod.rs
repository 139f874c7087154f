//! CLI argument parsing and validation
//!
//! This module provides the command-line interface for afinar.
//!
//! # Usage
//!
//! ```bash
//! afinar assemble --mode head_only --task multimodal
//! afinar assemble --output config.yaml --artifacts-root /data/brawn
//! afinar validate config.yaml
//! afinar info config.yaml --format json
//! ```

mod core;
mod types;

// Re-export all public types
pub use core::{
    options_from_args, parse_args, AssembleArgs, Cli, Command, InfoArgs, ValidateArgs,
};
pub use types::{ConfigFormat, OutputFormat};
