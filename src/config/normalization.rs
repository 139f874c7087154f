//! Normalization schemes for action and proprio statistics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How action and proprio vectors are normalized by the data pipeline.
///
/// The serialized strings are part of the trainer handoff contract and must
/// stay `"normal"` and `"bounds"` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationType {
    /// Normalize to mean 0, std 1
    #[default]
    Normal,
    /// Rescale into [-1, 1]
    Bounds,
}

impl FromStr for NormalizationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "bounds" => Ok(Self::Bounds),
            _ => Err(format!(
                "Unknown normalization type: {s}. Valid types: normal, bounds"
            )),
        }
    }
}

impl fmt::Display for NormalizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Bounds => write!(f, "bounds"),
        }
    }
}
