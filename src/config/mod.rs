//! Configuration loading and management for the freight engine.
//!
//! This module provides functionality to load engine configurations from YAML
//! files: pricing constants, equipment multipliers, carrier scoring bands and
//! rate recommendation tiers. Every table also has a built-in default.
//!
//! # Example
//!
//! ```no_run
//! use freight_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, EngineMetadata, EquipmentMultipliers, HeavyLoadRule, InsuranceBonus,
    MatchingConfig, PricingConfig, RecommendationConfig, RecommendationTier, ScoreBand,
    ScoringConfig,
};
