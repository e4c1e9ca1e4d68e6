//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EngineConfig, EngineMetadata, MatchingConfig, PricingConfig, RecommendationConfig,
    ScoringConfig,
};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them and hands out the typed tables the core operates on.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml     # Configuration metadata
/// ├── pricing.yaml    # Per-mile rate, surcharges, margin, equipment multipliers
/// └── matching.yaml   # Scoring bands and rate recommendation tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use freight_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded configuration: {}", loader.metadata().name);
/// println!("Base rate: ${}/mile", loader.pricing().base_rate_per_mile);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// describes tables that fail validation.
    ///
    /// ```no_run
    /// use freight_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), freight_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let pricing = Self::load_yaml::<PricingConfig>(&path.join("pricing.yaml"))?;
        let matching = Self::load_yaml::<MatchingConfig>(&path.join("matching.yaml"))?;

        let config = EngineConfig::new(metadata, pricing, matching)?;
        debug!(
            name = %config.metadata().name,
            version = %config.metadata().version,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        self.config.pricing()
    }

    /// Returns the scoring tables.
    pub fn scoring(&self) -> &ScoringConfig {
        self.config.scoring()
    }

    /// Returns the rate recommendation tiers.
    pub fn recommendation(&self) -> &RecommendationConfig {
        self.config.recommendation()
    }
}
