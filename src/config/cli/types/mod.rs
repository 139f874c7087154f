//! CLI type enums for output and config formats.

mod config_format;
mod output_format;


pub use config_format::ConfigFormat;
pub use output_format::OutputFormat;
