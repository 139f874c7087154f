//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{ConfigFormat, OutputFormat};
use crate::config::assemble::AssembleOptions;
use crate::config::dataset::DatasetSpec;
use crate::config::schema::{ConditioningTask, FinetuneMode};

/// Afinar: finetuning configuration assembly
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "afinar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Assemble, validate, and inspect finetuning configurations for a multi-embodiment robot policy"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Assemble a finetuning configuration from mode, task, and head choices
    Assemble(AssembleArgs),

    /// Validate an assembled configuration file
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),
}

/// Arguments for the assemble command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AssembleArgs {
    /// Finetuning mode (full, head_only)
    #[arg(short, long, default_value = "full")]
    pub mode: FinetuneMode,

    /// Conditioning task (image_conditioned, language_conditioned, multimodal)
    #[arg(short, long, default_value = "language_conditioned")]
    pub task: ConditioningTask,

    /// Action head to finetune
    #[arg(long, default_value = "single_arm")]
    pub head_name: String,

    /// Artifacts root receiving the checkpoints directory (default: ~/brawn_artifacts)
    #[arg(long)]
    pub artifacts_root: Option<PathBuf>,

    /// Total optimizer step count
    #[arg(long, default_value_t = 100_000)]
    pub max_steps: usize,

    /// Observation window length
    #[arg(long, default_value_t = 1)]
    pub window_size: usize,

    /// Per-step batch size
    #[arg(short, long, default_value_t = 128)]
    pub batch_size: usize,

    /// Seed for shuffling and augmentation
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Override the dataset name
    #[arg(long)]
    pub dataset_name: Option<String>,

    /// Override the dataset directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Write the config to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Serialization format (yaml, json)
    #[arg(short, long, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to an assembled configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to an assembled configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Build assembly options from parsed command-line arguments
pub fn options_from_args(args: &AssembleArgs) -> AssembleOptions {
    let mut opts = AssembleOptions {
        mode: args.mode,
        task: args.task,
        head_name: args.head_name.clone(),
        max_steps: args.max_steps,
        window_size: args.window_size,
        batch_size: args.batch_size,
        seed: args.seed,
        ..Default::default()
    };
    if let Some(root) = &args.artifacts_root {
        opts.artifacts_root = root.clone();
    }
    if args.dataset_name.is_some() || args.data_dir.is_some() {
        let mut dataset = DatasetSpec::brawn_pick_bottled_sugar(&opts.artifacts_root);
        if let Some(name) = &args.dataset_name {
            dataset.name = name.clone();
        }
        if let Some(dir) = &args.data_dir {
            dataset.data_dir = dir.clone();
        }
        opts.dataset = Some(dataset);
    }
    opts
}
