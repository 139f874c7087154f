//! Configuration validation
//!
//! Validates assembled finetuning configurations before any directory is
//! provisioned or any config leaves the crate.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::validate_config;
