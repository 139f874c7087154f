//! Configuration validation logic
//!
//! Validates assembled finetuning configurations before they are written
//! out or any directory is provisioned.

use super::error::ValidationError;
use crate::config::heads::action_dim_for_head;
use crate::config::schema::{ConditioningTask, FinetuneConfig, FinetuneMode};
use crate::config::transforms::{GOAL_RELABEL_UNIFORM, TASK_AUGMENT_DELETE};

/// Validate an assembled finetuning configuration
///
/// Checks:
/// - Scalar values are in valid ranges
/// - The learning rate schedule has a sane shape
/// - Derived fields agree with the mode, task, and shared bindings
/// - The dataset description is complete and matches the action head
pub fn validate_config(config: &FinetuneConfig) -> Result<(), ValidationError> {
    // Validate run scalars
    if config.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(config.batch_size));
    }

    if config.shuffle_buffer_size == 0 {
        return Err(ValidationError::InvalidShuffleBufferSize(
            config.shuffle_buffer_size,
        ));
    }

    if config.num_steps == 0 {
        return Err(ValidationError::InvalidNumSteps(config.num_steps));
    }

    if config.log_interval == 0 {
        return Err(ValidationError::InvalidLogInterval(config.log_interval));
    }

    if config.eval_interval == 0 {
        return Err(ValidationError::InvalidEvalInterval(config.eval_interval));
    }

    if config.save_interval == 0 {
        return Err(ValidationError::InvalidSaveInterval(config.save_interval));
    }

    if config.frame_transform_threads == 0 {
        return Err(ValidationError::InvalidFrameTransformThreads(
            config.frame_transform_threads,
        ));
    }

    if config.window_size == 0 {
        return Err(ValidationError::InvalidWindowSize(config.window_size));
    }

    if config.pretrained_path.is_empty() {
        return Err(ValidationError::EmptyPretrainedPath);
    }

    // Validate the learning rate schedule
    let lr = &config.optimizer.learning_rate;

    if lr.name != "cosine" {
        return Err(ValidationError::InvalidSchedule(lr.name.clone()));
    }

    if lr.peak_value <= 0.0 || lr.peak_value > 1.0 {
        return Err(ValidationError::InvalidPeakLearningRate(lr.peak_value));
    }

    if lr.init_value < 0.0 || lr.init_value > lr.peak_value {
        return Err(ValidationError::InvalidInitLearningRate(lr.init_value));
    }

    if lr.end_value < 0.0 || lr.end_value > lr.peak_value {
        return Err(ValidationError::InvalidEndLearningRate(lr.end_value));
    }

    if lr.warmup_steps > lr.decay_steps {
        return Err(ValidationError::WarmupExceedsDecay {
            warmup: lr.warmup_steps,
            decay: lr.decay_steps,
        });
    }

    // Validate optimizer scalars
    if config.optimizer.weight_decay < 0.0 {
        return Err(ValidationError::InvalidWeightDecay(
            config.optimizer.weight_decay,
        ));
    }

    if config.optimizer.clip_gradient <= 0.0 {
        return Err(ValidationError::InvalidClipGradient(
            config.optimizer.clip_gradient,
        ));
    }

    if config.optimizer.grad_accumulation_steps == 0 {
        return Err(ValidationError::InvalidGradAccumulation(
            config.optimizer.grad_accumulation_steps,
        ));
    }

    // Frozen parameters must agree with the finetuning mode
    match (config.finetuning_mode, &config.optimizer.frozen_keys) {
        (FinetuneMode::Full, Some(_)) => return Err(ValidationError::FrozenKeysInFullMode),
        (FinetuneMode::HeadOnly, None) => return Err(ValidationError::MissingFrozenKeys),
        (FinetuneMode::HeadOnly, Some(keys)) if keys.is_empty() => {
            return Err(ValidationError::MissingFrozenKeys)
        }
        _ => {}
    }

    // Fields that derive from the same binding must not drift apart
    if lr.decay_steps != config.num_steps {
        return Err(ValidationError::DecayStepsDrift {
            decay: lr.decay_steps,
            num_steps: config.num_steps,
        });
    }

    if config.traj_transform_kwargs.window_size != config.window_size {
        return Err(ValidationError::WindowSizeDrift {
            traj: config.traj_transform_kwargs.window_size,
            top: config.window_size,
        });
    }

    // Goal relabeling must agree with the conditioning task
    match (
        config.modality,
        &config.traj_transform_kwargs.goal_relabeling_strategy,
    ) {
        (ConditioningTask::LanguageConditioned, Some(strategy)) => {
            return Err(ValidationError::UnexpectedGoalRelabeling(strategy.clone()))
        }
        (ConditioningTask::ImageConditioned | ConditioningTask::Multimodal, None) => {
            return Err(ValidationError::MissingGoalRelabeling(
                config.modality.to_string(),
            ))
        }
        (_, Some(strategy)) if strategy != GOAL_RELABEL_UNIFORM => {
            return Err(ValidationError::InvalidGoalRelabeling(strategy.clone()))
        }
        _ => {}
    }

    // keep_image_prob encodes the conditioning task
    let expected_keep_prob = match config.modality {
        ConditioningTask::ImageConditioned => 1.0,
        ConditioningTask::LanguageConditioned => 0.0,
        ConditioningTask::Multimodal => 0.5,
    };
    let keep_prob = config.traj_transform_kwargs.task_augment_kwargs.keep_image_prob;
    if (keep_prob - expected_keep_prob).abs() > f64::EPSILON {
        return Err(ValidationError::KeepImageProbMismatch {
            task: config.modality.to_string(),
            got: keep_prob,
            expected: expected_keep_prob,
        });
    }

    // Validate the task augmentation strategy
    if config.traj_transform_kwargs.task_augment_strategy != TASK_AUGMENT_DELETE {
        return Err(ValidationError::InvalidTaskAugment(
            config.traj_transform_kwargs.task_augment_strategy.clone(),
        ));
    }

    // Validate the dataset description
    if config.dataset_kwargs.name.is_empty() {
        return Err(ValidationError::EmptyDatasetName);
    }

    if config.dataset_kwargs.action_normalization_mask.is_empty() {
        return Err(ValidationError::EmptyNormalizationMask);
    }

    // Mask length check only applies to heads with a known dimensionality
    if let Some(action_dim) = action_dim_for_head(&config.head_name) {
        let mask_len = config.dataset_kwargs.action_normalization_mask.len();
        if mask_len != action_dim {
            return Err(ValidationError::MaskLengthMismatch {
                head: config.head_name.clone(),
                mask_len,
                action_dim,
            });
        }
    }

    Ok(())
}
