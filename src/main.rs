//! Afinar CLI
//!
//! Configuration assembly entry point for finetuning runs.
//!
//! # Usage
//!
//! ```bash
//! # Assemble the default language-conditioned full finetune config
//! afinar assemble
//!
//! # Head-only multimodal run, written to a file
//! afinar assemble --mode head_only --task multimodal --output run.yaml
//!
//! # Validate an assembled config
//! afinar validate run.yaml --detailed
//!
//! # Show config info
//! afinar info run.yaml --format json
//! ```

use afinar::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
