//! Afinar: finetuning configuration assembly for a multi-embodiment robot policy
//!
//! Expands a small set of human choices into the complete nested
//! configuration consumed by the policy's training engine:
//!
//! - **Closed categorical types**: finetuning mode, conditioning task, and
//!   normalization scheme parse at the boundary and carry stable string
//!   encodings across it
//! - **Deterministic derivation**: frozen parameter patterns, goal
//!   relabeling, and the warmup cosine schedule all follow from the choices
//!   and two shared bindings (`max_steps`, `window_size`)
//! - **A single validation gate**: every config is checked for range and
//!   coherence errors before any directory is provisioned
//! - **Idempotent provisioning**: the artifacts and checkpoints directories
//!   are created once and safely re-checked on every run
//!
//! # Example
//!
//! ```no_run
//! use afinar::{assemble, AssembleOptions};
//! use afinar::config::{ConditioningTask, FinetuneMode};
//!
//! let opts = AssembleOptions {
//!     mode: FinetuneMode::HeadOnly,
//!     task: ConditioningTask::Multimodal,
//!     ..Default::default()
//! };
//! let config = assemble(&opts)?;
//! println!("{}", config.to_yaml()?);
//! # Ok::<(), afinar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod workspace;

pub use config::{assemble, build_config, AssembleOptions, FinetuneConfig};
pub use error::{Error, Result};
