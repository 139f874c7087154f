//! On-disk format for assembled configuration files.

/// Serialization format for the assemble command's output
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConfigFormat {
    /// YAML, the trainer's native handoff form
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl ConfigFormat {
    fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(format!(
                "Unknown config format: {s}. Valid formats: yaml, json"
            )),
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
