//! Assemble command implementation

use crate::cli::logging::{log, log_success};
use crate::cli::LogLevel;
use crate::config::{assemble, options_from_args, AssembleArgs, ConfigFormat};

pub fn run_assemble(args: AssembleArgs, level: LogLevel) -> Result<(), String> {
    let opts = options_from_args(&args);

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Assembling {} / {} config for head '{}'",
            opts.mode, opts.task, opts.head_name
        ),
    );

    let config = assemble(&opts).map_err(|e| format!("Assembly error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("  Artifacts root: {}", opts.artifacts_root.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Checkpoints: {}", config.save_dir.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Schedule: cosine (peak={}, warmup={}, steps={})",
            config.optimizer.learning_rate.peak_value,
            config.optimizer.learning_rate.warmup_steps,
            config.num_steps
        ),
    );

    let rendered = match args.format {
        ConfigFormat::Yaml => config.to_yaml(),
        ConfigFormat::Json => config.to_json(),
    }
    .map_err(|e| format!("Serialization error: {e}"))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log_success(level, &format!("Config written to {}", path.display()));
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, parse_args, Command};
    use tempfile::TempDir;

    fn assemble_args(extra: &[&str]) -> AssembleArgs {
        let mut argv = vec!["afinar", "assemble"];
        argv.extend_from_slice(extra);
        match parse_args(argv).unwrap().command {
            Command::Assemble(args) => args,
            _ => panic!("Expected Assemble command"),
        }
    }

    #[test]
    fn test_run_assemble_writes_yaml() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("artifacts");
        let out = dir.path().join("config.yaml");

        let args = assemble_args(&[
            "--artifacts-root",
            root.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ]);
        run_assemble(args, LogLevel::Quiet).unwrap();

        assert!(out.is_file());
        assert!(root.join("checkpoints").is_dir());

        // the written file loads and validates
        let config = load_config(&out).unwrap();
        assert_eq!(config.save_dir, root.join("checkpoints"));
    }

    #[test]
    fn test_run_assemble_writes_json() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("artifacts");
        let out = dir.path().join("config.json");

        let args = assemble_args(&[
            "--artifacts-root",
            root.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
            "--format",
            "json",
        ]);
        run_assemble(args, LogLevel::Quiet).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.trim_start().starts_with('{'));
        assert!(load_config(&out).is_ok());
    }

    #[test]
    fn test_run_assemble_rejects_short_run() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("artifacts");

        // shorter than the fixed warmup, so the validation gate rejects it
        let args = assemble_args(&[
            "--artifacts-root",
            root.to_str().unwrap(),
            "--max-steps",
            "500",
        ]);
        let err = run_assemble(args, LogLevel::Quiet).unwrap_err();
        assert!(err.contains("Assembly error"));
        assert!(!root.exists());
    }

    #[test]
    fn test_run_assemble_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("artifacts");
        let out = dir.path().join("config.yaml");

        let args = assemble_args(&[
            "--artifacts-root",
            root.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ]);
        run_assemble(args.clone(), LogLevel::Quiet).unwrap();
        run_assemble(args, LogLevel::Quiet).unwrap();

        assert!(root.join("checkpoints").is_dir());
    }
}
