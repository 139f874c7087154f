//! Assembled finetuning configuration schema
//!
//! The nested structure serialized from [`FinetuneConfig`] is the handoff
//! artifact consumed by the training engine. Field declaration order matches
//! the engine's expected layout, and serialized names must not change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::dataset::DatasetSpec;
use super::optimizer::OptimizerSpec;
use super::transforms::{FrameTransformSpec, TrajTransformSpec};
use super::validate::validate_config;
use crate::error::{Error, Result};

/// Which model parameters are trainable during finetuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinetuneMode {
    /// Update every parameter
    #[default]
    Full,
    /// Freeze the transformer trunk, update only the action head
    HeadOnly,
}

impl FromStr for FinetuneMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "head_only" => Ok(Self::HeadOnly),
            _ => Err(format!(
                "Unknown finetuning mode: {s}. Valid modes: full, head_only"
            )),
        }
    }
}

impl fmt::Display for FinetuneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::HeadOnly => write!(f, "head_only"),
        }
    }
}

/// Conditioning modality used for task specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditioningTask {
    /// Condition on goal images only
    ImageConditioned,
    /// Condition on language instructions only
    #[default]
    LanguageConditioned,
    /// Train on both, sampling the conditioning per trajectory
    Multimodal,
}

impl FromStr for ConditioningTask {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image_conditioned" => Ok(Self::ImageConditioned),
            "language_conditioned" => Ok(Self::LanguageConditioned),
            "multimodal" => Ok(Self::Multimodal),
            _ => Err(format!(
                "Unknown conditioning task: {s}. Valid tasks: image_conditioned, language_conditioned, multimodal"
            )),
        }
    }
}

impl fmt::Display for ConditioningTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageConditioned => write!(f, "image_conditioned"),
            Self::LanguageConditioned => write!(f, "language_conditioned"),
            Self::Multimodal => write!(f, "multimodal"),
        }
    }
}

/// Experiment tracking destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WandbSpec {
    /// Tracking project name
    pub project: String,

    /// Run group, assigned per experiment when known
    #[serde(default)]
    pub group: Option<String>,

    /// Tracking entity (team) name
    pub entity: String,
}

impl Default for WandbSpec {
    fn default() -> Self {
        Self {
            project: "crossformer-fine-tuning".to_string(),
            group: None,
            entity: "research-development".to_string(),
        }
    }
}

/// Validation set evaluation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValSpec {
    /// Shuffle buffer size for the validation split
    pub val_shuffle_buffer_size: usize,

    /// Batches drawn per evaluation
    pub num_val_batches: usize,
}

impl Default for ValSpec {
    fn default() -> Self {
        Self {
            val_shuffle_buffer_size: 1000,
            num_val_batches: 16,
        }
    }
}

/// Complete configuration for one finetuning run.
///
/// Assembled by [`build_config`](super::assemble::build_config) from a small
/// set of choices; every derived field is checked for coherence by
/// [`validate_config`] before the config leaves this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinetuneConfig {
    /// Pretrained checkpoint location, e.g. `hf://rail-berkeley/crossformer`
    pub pretrained_path: String,

    /// Checkpoint step to restore, or `None` for the latest
    #[serde(default)]
    pub pretrained_step: Option<u64>,

    /// Per-step batch size
    pub batch_size: usize,

    /// Shuffle buffer size for the training split
    pub shuffle_buffer_size: usize,

    /// Total optimizer step count for the run
    pub num_steps: usize,

    /// Steps between training metric logs
    pub log_interval: usize,

    /// Steps between validation evaluations
    pub eval_interval: usize,

    /// Steps between checkpoint saves
    pub save_interval: usize,

    /// Directory the trainer saves checkpoints into
    pub save_dir: PathBuf,

    /// Seed for shuffling and augmentation
    pub seed: u64,

    /// Experiment tracking destination
    pub wandb: WandbSpec,

    /// Dataset identity, observation mapping, and normalization
    pub dataset_kwargs: DatasetSpec,

    /// Conditioning modality
    pub modality: ConditioningTask,

    /// Which parameters are trainable
    pub finetuning_mode: FinetuneMode,

    /// Action head receiving gradient updates
    pub head_name: String,

    /// Observation frames per window
    pub window_size: usize,

    /// Optimizer and learning rate schedule
    pub optimizer: OptimizerSpec,

    /// Validation set evaluation parameters
    pub val_kwargs: ValSpec,

    /// Threads for decoding, resizing, and augmenting frames
    pub frame_transform_threads: usize,

    /// Goal relabeling and chunking applied per trajectory
    pub traj_transform_kwargs: TrajTransformSpec,

    /// Per-frame image resizing and augmentation
    pub frame_transform_kwargs: FrameTransformSpec,
}

impl FinetuneConfig {
    /// Serialize to the YAML handoff form.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a configuration from a YAML or JSON file and validate it.
///
/// The format is chosen by extension: `.json` parses as JSON, anything else
/// as YAML. A config that parses but fails validation is rejected.
pub fn load_config(path: &Path) -> Result<FinetuneConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    let config: FinetuneConfig = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse JSON config: {e}")))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?
    };

    validate_config(&config).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(config)
}
