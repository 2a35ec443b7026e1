pub mod defaults;
mod detection_config;
mod observability_config;
mod text_config;

pub use detection_config::DetectionConfig;
pub use observability_config::ObservabilityConfig;
pub use text_config::TextConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, StorylineResult};

/// Top-level configuration, one TOML section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorylineConfig {
    pub detection: DetectionConfig,
    pub text: TextConfig,
    pub observability: ObservabilityConfig,
}

impl StorylineConfig {
    /// Parse a TOML string. Missing sections and keys fall back to defaults.
    pub fn from_toml(input: &str) -> StorylineResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> StorylineResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&input)
    }

    pub fn validate(&self) -> StorylineResult<()> {
        self.detection.validate()
    }
}
