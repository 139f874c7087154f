//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::assemble::{build_config, AssembleOptions};
use crate::config::schema::{ConditioningTask, FinetuneMode};
use proptest::prelude::*;

fn arb_mode() -> impl Strategy<Value = FinetuneMode> {
    prop_oneof![Just(FinetuneMode::Full), Just(FinetuneMode::HeadOnly)]
}

fn arb_task() -> impl Strategy<Value = ConditioningTask> {
    prop_oneof![
        Just(ConditioningTask::ImageConditioned),
        Just(ConditioningTask::LanguageConditioned),
        Just(ConditioningTask::Multimodal),
    ]
}

fn arb_head() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("single_arm".to_string()),
        Just("bimanual".to_string()),
        Just("nav".to_string()),
        Just("quadruped".to_string()),
    ]
}

fn arb_valid_options() -> impl Strategy<Value = AssembleOptions> {
    (
        arb_mode(),
        arb_task(),
        2001usize..1_000_000, // max_steps must clear the fixed 2000 step warmup
        1usize..16,           // window_size
        1usize..1024,         // batch_size
        any::<u64>(),         // seed
    )
        .prop_map(|(mode, task, max_steps, window_size, batch_size, seed)| {
            AssembleOptions {
                mode,
                task,
                head_name: "single_arm".to_string(),
                max_steps,
                window_size,
                batch_size,
                seed,
                ..Default::default()
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_assembled_config_always_validates(opts in arb_valid_options()) {
        let config = build_config(&opts).unwrap();
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_frozen_keys_match_mode(opts in arb_valid_options()) {
        let config = build_config(&opts).unwrap();
        match opts.mode {
            FinetuneMode::Full => prop_assert!(config.optimizer.frozen_keys.is_none()),
            FinetuneMode::HeadOnly => {
                let keys = config.optimizer.frozen_keys.as_ref().unwrap();
                prop_assert!(!keys.is_empty());
            }
        }
    }

    #[test]
    fn prop_relabeling_matches_task(opts in arb_valid_options()) {
        let config = build_config(&opts).unwrap();
        let strategy = &config.traj_transform_kwargs.goal_relabeling_strategy;
        match opts.task {
            ConditioningTask::LanguageConditioned => prop_assert!(strategy.is_none()),
            _ => prop_assert_eq!(strategy.as_deref(), Some("uniform")),
        }
    }

    #[test]
    fn prop_shared_bindings_agree(opts in arb_valid_options()) {
        let config = build_config(&opts).unwrap();
        prop_assert_eq!(config.num_steps, opts.max_steps);
        prop_assert_eq!(config.optimizer.learning_rate.decay_steps, opts.max_steps);
        prop_assert_eq!(config.window_size, opts.window_size);
        prop_assert_eq!(config.traj_transform_kwargs.window_size, opts.window_size);
    }

    #[test]
    fn prop_zero_batch_size_fails(opts in arb_valid_options()) {
        let mut config = build_config(&opts).unwrap();
        config.batch_size = 0;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn prop_drifted_decay_steps_fail(
        opts in arb_valid_options(),
        offset in 1usize..10_000
    ) {
        let mut config = build_config(&opts).unwrap();
        config.optimizer.learning_rate.decay_steps = config.num_steps + offset;
        prop_assert!(
            matches!(
                validate_config(&config),
                Err(ValidationError::DecayStepsDrift { .. })
            ),
            "expected DecayStepsDrift error"
        );
    }

    #[test]
    fn prop_drifted_window_fails(
        opts in arb_valid_options(),
        offset in 1usize..64
    ) {
        let mut config = build_config(&opts).unwrap();
        config.traj_transform_kwargs.window_size = config.window_size + offset;
        prop_assert!(
            matches!(
                validate_config(&config),
                Err(ValidationError::WindowSizeDrift { .. })
            ),
            "expected WindowSizeDrift error"
        );
    }

    #[test]
    fn prop_wrong_keep_image_prob_fails(
        opts in arb_valid_options(),
        wrong in 0.01f64..0.49
    ) {
        let mut config = build_config(&opts).unwrap();
        // 0.01..0.49 is outside every task's expected value
        config.traj_transform_kwargs.task_augment_kwargs.keep_image_prob = wrong;
        prop_assert!(
            matches!(
                validate_config(&config),
                Err(ValidationError::KeepImageProbMismatch { .. })
            ),
            "expected KeepImageProbMismatch error"
        );
    }

    #[test]
    fn prop_known_heads_pass_mask_check(
        opts in arb_valid_options(),
        head in arb_head()
    ) {
        let mut config = build_config(&opts).unwrap();
        let dim = crate::config::heads::action_dim_for_head(&head).unwrap();
        config.head_name = head;
        config.dataset_kwargs.action_normalization_mask = vec![true; dim];
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_schedule_value_bounded_by_peak(
        opts in arb_valid_options(),
        step in 0usize..2_000_000
    ) {
        let config = build_config(&opts).unwrap();
        let lr = &config.optimizer.learning_rate;
        let value = lr.value_at(step);
        prop_assert!(value >= 0.0);
        prop_assert!(value <= lr.peak_value + 1e-12);
    }
}
