use crate::error::{PipelineError, Result};
use crate::pipeline::rating::RatingDomain;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Pipeline configuration, loaded from a TOML file.
///
/// Only the rating domain is deployment-specific; everything else in the
/// pipeline (sheet contract, noise patterns) is a fixed business rule.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rating: RatingDomain,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rating: RatingDomain::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_path("config.toml")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        if config.rating.min > config.rating.max {
            return Err(PipelineError::Config(format!(
                "rating domain is inverted: min {} > max {}",
                config.rating.min, config.rating.max
            )));
        }
        Ok(config)
    }
}
