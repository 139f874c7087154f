//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Pretrained: {}", config.pretrained_path);
            println!(
                "Finetuning: {} / {} (head: {})",
                config.finetuning_mode, config.modality, config.head_name
            );
            println!("Dataset: {}", config.dataset_kwargs.name);
            println!(
                "Schedule: {} (peak={}, warmup={}, steps={})",
                config.optimizer.learning_rate.name,
                config.optimizer.learning_rate.peak_value,
                config.optimizer.learning_rate.warmup_steps,
                config.num_steps
            );
            println!("Batch size: {}", config.batch_size);
            println!("Save dir: {}", config.save_dir.display());

            if config.optimizer.frozen_keys.is_some() {
                println!("Frozen keys: enabled");
            }
            if config.traj_transform_kwargs.goal_relabeling_strategy.is_some() {
                println!("Goal relabeling: enabled");
            }
        }
        OutputFormat::Json => {
            let json = config
                .to_json()
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = config
                .to_yaml()
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
