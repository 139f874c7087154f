//! Validation error types
//!
//! Defines all validation error variants for assembled finetuning
//! configurations.

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid shuffle buffer size: {0} (must be > 0)")]
    InvalidShuffleBufferSize(usize),

    #[error("Invalid step count: {0} (must be > 0)")]
    InvalidNumSteps(usize),

    #[error("Invalid log interval: {0} (must be > 0)")]
    InvalidLogInterval(usize),

    #[error("Invalid eval interval: {0} (must be > 0)")]
    InvalidEvalInterval(usize),

    #[error("Invalid save interval: {0} (must be > 0)")]
    InvalidSaveInterval(usize),

    #[error("Invalid frame transform threads: {0} (must be > 0)")]
    InvalidFrameTransformThreads(usize),

    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindowSize(usize),

    #[error("Pretrained path cannot be empty")]
    EmptyPretrainedPath,

    #[error("Invalid peak learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidPeakLearningRate(f64),

    #[error("Invalid initial learning rate: {0} (must be >= 0.0 and <= peak)")]
    InvalidInitLearningRate(f64),

    #[error("Invalid end learning rate: {0} (must be >= 0.0 and <= peak)")]
    InvalidEndLearningRate(f64),

    #[error("Invalid learning rate schedule: {0} (must be one of: cosine)")]
    InvalidSchedule(String),

    #[error("Warmup steps {warmup} exceed schedule length {decay}")]
    WarmupExceedsDecay { warmup: usize, decay: usize },

    #[error("Invalid weight decay: {0} (must be >= 0.0)")]
    InvalidWeightDecay(f64),

    #[error("Invalid gradient clip value: {0} (must be > 0.0)")]
    InvalidClipGradient(f64),

    #[error("Invalid gradient accumulation steps: {0} (must be > 0)")]
    InvalidGradAccumulation(usize),

    #[error("frozen_keys must be null when finetuning_mode is full")]
    FrozenKeysInFullMode,

    #[error("frozen_keys must be a non-empty pattern list when finetuning_mode is head_only")]
    MissingFrozenKeys,

    #[error("Schedule decay_steps {decay} does not match num_steps {num_steps} (both derive from max_steps)")]
    DecayStepsDrift { decay: usize, num_steps: usize },

    #[error("Trajectory window size {traj} does not match window_size {top} (both derive from the same binding)")]
    WindowSizeDrift { traj: usize, top: usize },

    #[error("goal_relabeling_strategy must be null for language_conditioned (got {0})")]
    UnexpectedGoalRelabeling(String),

    #[error("goal_relabeling_strategy is required for {0} conditioning")]
    MissingGoalRelabeling(String),

    #[error("Invalid goal relabeling strategy: {0} (must be one of: uniform)")]
    InvalidGoalRelabeling(String),

    #[error("Invalid keep_image_prob {got} for {task} (expected {expected})")]
    KeepImageProbMismatch {
        task: String,
        got: f64,
        expected: f64,
    },

    #[error("Invalid task augment strategy: {0} (must be one of: delete_task_conditioning)")]
    InvalidTaskAugment(String),

    #[error("Dataset name cannot be empty")]
    EmptyDatasetName,

    #[error("Action normalization mask cannot be empty")]
    EmptyNormalizationMask,

    #[error("Action normalization mask length {mask_len} does not match head '{head}' action dimension {action_dim}")]
    MaskLengthMismatch {
        head: String,
        mask_len: usize,
        action_dim: usize,
    },
}
