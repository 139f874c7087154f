//! Validate command implementation

use crate::cli::logging::{log, log_success};
use crate::cli::LogLevel;
use crate::config::{load_config, FinetuneConfig, ValidateArgs};

/// Format run-level settings as a string
pub fn format_run_info(config: &FinetuneConfig) -> String {
    let mut lines = vec![
        format!("  Pretrained: {}", config.pretrained_path),
        format!("  Steps: {}", config.num_steps),
        format!("  Batch size: {}", config.batch_size),
        format!("  Seed: {}", config.seed),
    ];
    if let Some(step) = config.pretrained_step {
        lines.push(format!("  Pretrained step: {step}"));
    }
    lines.push(format!("  Save dir: {}", config.save_dir.display()));
    lines.join("\n")
}

/// Format mode, task, and head choices as a string
pub fn format_conditioning_info(config: &FinetuneConfig) -> String {
    let mut lines = vec![
        format!("  Mode: {}", config.finetuning_mode),
        format!("  Task: {}", config.modality),
        format!("  Head: {}", config.head_name),
    ];
    match &config.optimizer.frozen_keys {
        Some(keys) => lines.push(format!("  Frozen keys: {}", keys.join(", "))),
        None => lines.push("  Frozen keys: none (all parameters trainable)".to_string()),
    }
    match &config.traj_transform_kwargs.goal_relabeling_strategy {
        Some(strategy) => lines.push(format!("  Goal relabeling: {strategy}")),
        None => lines.push("  Goal relabeling: disabled".to_string()),
    }
    lines.push(format!(
        "  Keep image prob: {}",
        config.traj_transform_kwargs.task_augment_kwargs.keep_image_prob
    ));
    lines.join("\n")
}

/// Format the dataset description as a string
pub fn format_dataset_info(config: &FinetuneConfig) -> String {
    let ds = &config.dataset_kwargs;
    let mask: Vec<&str> = ds
        .action_normalization_mask
        .iter()
        .map(|&m| if m { "norm" } else { "raw" })
        .collect();
    vec![
        format!("  Dataset: {}", ds.name),
        format!("  Data dir: {}", ds.data_dir.display()),
        format!("  Language key: {}", ds.language_key),
        format!("  Normalization: {}", ds.action_proprio_normalization_type),
        format!("  Action mask: [{}]", mask.join(", ")),
        format!("  Standardize fn: {}", ds.standardize_fn),
    ]
    .join("\n")
}

/// Format the optimizer configuration as a string
pub fn format_optimizer_info(config: &FinetuneConfig) -> String {
    let lr = &config.optimizer.learning_rate;
    vec![
        format!(
            "  Schedule: {} (peak={}, warmup={}, decay={})",
            lr.name, lr.peak_value, lr.warmup_steps, lr.decay_steps
        ),
        format!("  Weight decay: {}", config.optimizer.weight_decay),
        format!("  Gradient clip: {}", config.optimizer.clip_gradient),
        format!(
            "  Grad accumulation: {}",
            config.optimizer.grad_accumulation_steps
        ),
    ]
    .join("\n")
}

/// Format transform settings as a string
pub fn format_transform_info(config: &FinetuneConfig) -> String {
    let mut lines = vec![
        format!("  Window size: {}", config.window_size),
        format!(
            "  Action horizon: {}",
            config.traj_transform_kwargs.action_horizon
        ),
    ];
    for (slot, (h, w)) in &config.frame_transform_kwargs.resize_size {
        lines.push(format!("  Resize [{slot}]: {h}x{w}"));
    }
    lines.push(format!(
        "  Frame transform threads: {}",
        config.frame_transform_threads
    ));
    lines.join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &FinetuneConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_run_info(config));
    println!();
    println!("{}", format_conditioning_info(config));
    println!();
    println!("{}", format_dataset_info(config));
    println!();
    println!("{}", format_optimizer_info(config));
    println!();
    println!("{}", format_transform_info(config));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    // load_config runs the full validation gate
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log_success(level, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&config);
    }

    Ok(())
}
