//! Assembly of complete finetuning configurations from a few choices
//!
//! A run is described by three categorical choices (mode, task, head) plus
//! a handful of scalars. Everything else in [`FinetuneConfig`] is derived
//! here deterministically.

use std::path::PathBuf;

use super::dataset::DatasetSpec;
use super::optimizer::{LearningRateSpec, OptimizerSpec};
use super::schema::{ConditioningTask, FinetuneConfig, FinetuneMode, ValSpec, WandbSpec};
use super::transforms::{
    FrameTransformSpec, TaskAugmentSpec, TrajTransformSpec, GOAL_RELABEL_UNIFORM,
    TASK_AUGMENT_DELETE,
};
use super::validate::validate_config;
use crate::error::{Error, Result};
use crate::workspace::{default_artifacts_root, ArtifactPaths};

/// Pretrained checkpoint every finetuning run starts from
const PRETRAINED_CHECKPOINT: &str = "hf://rail-berkeley/crossformer";

/// Freezes the transformer trunk, leaving only action heads trainable
const TRANSFORMER_FROZEN_PATTERN: &str = "crossformer_transformer.*";

/// Warmup length of the finetuning schedule in steps
const WARMUP_STEPS: usize = 2000;

/// Peak learning rate of the finetuning schedule
const PEAK_LEARNING_RATE: f64 = 3e-4;

/// The user-chosen knobs expanded into a [`FinetuneConfig`].
///
/// `max_steps` and `window_size` are single bindings: every derived field
/// that depends on them reads the value here, so the schedule length, run
/// length, and window agree by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembleOptions {
    /// Which parameters are trainable
    pub mode: FinetuneMode,

    /// Conditioning modality
    pub task: ConditioningTask,

    /// Action head to finetune
    pub head_name: String,

    /// Artifacts root receiving the checkpoints directory
    pub artifacts_root: PathBuf,

    /// Total optimizer steps; feeds both `num_steps` and the schedule length
    pub max_steps: usize,

    /// Observation window length; feeds the top level and the trajectory transform
    pub window_size: usize,

    /// Per-step batch size
    pub batch_size: usize,

    /// Seed for shuffling and augmentation
    pub seed: u64,

    /// Dataset override; the embedded lab dataset when `None`
    pub dataset: Option<DatasetSpec>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            mode: FinetuneMode::Full,
            task: ConditioningTask::LanguageConditioned,
            head_name: "single_arm".to_string(),
            artifacts_root: default_artifacts_root(),
            max_steps: 100_000,
            window_size: 1,
            batch_size: 128,
            seed: 42,
            dataset: None,
        }
    }
}

/// Derive the complete configuration and run it through the validation gate.
///
/// Pure apart from reading `opts`: no directory is created. Use [`assemble`]
/// to also provision the artifacts workspace.
pub fn build_config(opts: &AssembleOptions) -> Result<FinetuneConfig> {
    let paths = ArtifactPaths::under(&opts.artifacts_root);

    let frozen_keys = match opts.mode {
        FinetuneMode::Full => None,
        FinetuneMode::HeadOnly => Some(vec![TRANSFORMER_FROZEN_PATTERN.to_string()]),
    };

    let (goal_relabeling_strategy, keep_image_prob) = match opts.task {
        ConditioningTask::ImageConditioned => (Some(GOAL_RELABEL_UNIFORM.to_string()), 1.0),
        ConditioningTask::LanguageConditioned => (None, 0.0),
        ConditioningTask::Multimodal => (Some(GOAL_RELABEL_UNIFORM.to_string()), 0.5),
    };

    let dataset = opts
        .dataset
        .clone()
        .unwrap_or_else(|| DatasetSpec::brawn_pick_bottled_sugar(&opts.artifacts_root));

    let config = FinetuneConfig {
        pretrained_path: PRETRAINED_CHECKPOINT.to_string(),
        pretrained_step: None,
        batch_size: opts.batch_size,
        shuffle_buffer_size: 10_000,
        num_steps: opts.max_steps,
        log_interval: 100,
        eval_interval: 1000,
        save_interval: 1000,
        save_dir: paths.checkpoints,
        seed: opts.seed,
        wandb: WandbSpec::default(),
        dataset_kwargs: dataset,
        modality: opts.task,
        finetuning_mode: opts.mode,
        head_name: opts.head_name.clone(),
        window_size: opts.window_size,
        optimizer: OptimizerSpec {
            learning_rate: LearningRateSpec::cosine(
                PEAK_LEARNING_RATE,
                WARMUP_STEPS,
                opts.max_steps,
            ),
            weight_decay: 0.01,
            clip_gradient: 1.0,
            frozen_keys,
            // max_steps counts optimizer updates, not batches consumed
            grad_accumulation_steps: 2,
        },
        val_kwargs: ValSpec::default(),
        frame_transform_threads: 16,
        traj_transform_kwargs: TrajTransformSpec {
            window_size: opts.window_size,
            action_horizon: 4,
            goal_relabeling_strategy,
            task_augment_strategy: TASK_AUGMENT_DELETE.to_string(),
            task_augment_kwargs: TaskAugmentSpec { keep_image_prob },
        },
        frame_transform_kwargs: FrameTransformSpec::workspace_default(),
    };

    validate_config(&config).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(config)
}

/// Build, validate, and provision the artifacts workspace.
///
/// Validation runs before any directory is touched, so an invalid set of
/// choices leaves the filesystem unchanged.
pub fn assemble(opts: &AssembleOptions) -> Result<FinetuneConfig> {
    let config = build_config(opts)?;
    ArtifactPaths::under(&opts.artifacts_root).provision()?;
    Ok(config)
}
