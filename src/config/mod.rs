//! Finetuning configuration: schema, assembly, validation, and CLI types
//!
//! The flow is deliberately one-directional: a few human choices become an
//! [`AssembleOptions`], [`assemble`] expands them into a [`FinetuneConfig`],
//! [`validate_config`] gates the result, and the serialized form is handed
//! to the training engine.

pub mod assemble;
pub mod cli;
pub mod dataset;
pub mod heads;
pub mod module_ref;
pub mod normalization;
pub mod optimizer;
pub mod schema;
pub mod transforms;
pub mod validate;

pub use assemble::{assemble, build_config, AssembleOptions};
pub use cli::{
    options_from_args, parse_args, AssembleArgs, Cli, Command, ConfigFormat, InfoArgs,
    OutputFormat, ValidateArgs,
};
pub use dataset::DatasetSpec;
pub use heads::action_dim_for_head;
pub use module_ref::ModuleRef;
pub use normalization::NormalizationType;
pub use optimizer::{LearningRateSpec, OptimizerSpec};
pub use schema::{
    load_config, ConditioningTask, FinetuneConfig, FinetuneMode, ValSpec, WandbSpec,
};
pub use transforms::{
    FrameTransformSpec, ImageAugmentSpec, RandomResizedCropSpec, TaskAugmentSpec,
    TrajTransformSpec,
};
pub use validate::{validate_config, ValidationError};
