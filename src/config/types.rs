//! Configuration types for pricing and carrier matching.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every structure has a
//! `Default` that reproduces the engine's built-in tables, so the core can
//! run without any files on disk.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    BASE_RATE_PER_MILE, DEFAULT_MATCH_LIMIT, FUEL_SURCHARGE_FRACTION, HEAVY_LOAD_MULTIPLIER,
    HEAVY_LOAD_THRESHOLD_POUNDS, TARGET_MARGIN_FRACTION,
};
use crate::error::{EngineError, EngineResult};
use crate::models::EquipmentClass;

/// Metadata about the engine configuration set.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Name of the configuration set (e.g., "default").
    pub name: String,
    /// Version label of the configuration set.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            version: "built-in".to_string(),
            description: String::new(),
        }
    }
}

/// Per-mile rate multipliers by equipment class.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentMultipliers {
    /// Dry van multiplier.
    pub dry_van: Decimal,
    /// Reefer multiplier.
    pub reefer: Decimal,
    /// Flatbed multiplier.
    pub flatbed: Decimal,
    /// Step deck multiplier.
    pub step_deck: Decimal,
    /// Tanker multiplier.
    pub tanker: Decimal,
}

impl EquipmentMultipliers {
    /// Returns the multiplier for an equipment class.
    ///
    /// Unrecognized equipment falls back to 1.0.
    pub fn multiplier_for(&self, equipment_class: EquipmentClass) -> Decimal {
        match equipment_class {
            EquipmentClass::DryVan => self.dry_van,
            EquipmentClass::Reefer => self.reefer,
            EquipmentClass::Flatbed => self.flatbed,
            EquipmentClass::StepDeck => self.step_deck,
            EquipmentClass::Tanker => self.tanker,
            EquipmentClass::Other => Decimal::ONE,
        }
    }

    fn all(&self) -> [(&'static str, Decimal); 5] {
        [
            ("dry_van", self.dry_van),
            ("reefer", self.reefer),
            ("flatbed", self.flatbed),
            ("step_deck", self.step_deck),
            ("tanker", self.tanker),
        ]
    }
}

impl Default for EquipmentMultipliers {
    fn default() -> Self {
        Self {
            dry_van: Decimal::new(10, 1),
            reefer: Decimal::new(13, 1),
            flatbed: Decimal::new(12, 1),
            step_deck: Decimal::new(14, 1),
            tanker: Decimal::new(15, 1),
        }
    }
}

/// Surcharge applied to the per-mile rate for heavy shipments.
#[derive(Debug, Clone, Deserialize)]
pub struct HeavyLoadRule {
    /// Weight above which the surcharge applies (exclusive).
    pub threshold_pounds: Decimal,
    /// Multiplier applied to the per-mile rate.
    pub multiplier: Decimal,
}

impl Default for HeavyLoadRule {
    fn default() -> Self {
        Self {
            threshold_pounds: HEAVY_LOAD_THRESHOLD_POUNDS,
            multiplier: HEAVY_LOAD_MULTIPLIER,
        }
    }
}

/// Pricing configuration from pricing.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Starting linehaul rate in USD per mile.
    pub base_rate_per_mile: Decimal,
    /// Fuel surcharge as a fraction of the linehaul.
    pub fuel_surcharge_fraction: Decimal,
    /// Margin held when the caller does not override it, as a fraction.
    pub target_margin_fraction: Decimal,
    /// Heavy-load surcharge rule.
    pub heavy_load: HeavyLoadRule,
    /// Equipment multipliers.
    pub equipment_multipliers: EquipmentMultipliers,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_rate_per_mile: BASE_RATE_PER_MILE,
            fuel_surcharge_fraction: FUEL_SURCHARGE_FRACTION,
            target_margin_fraction: TARGET_MARGIN_FRACTION,
            heavy_load: HeavyLoadRule::default(),
            equipment_multipliers: EquipmentMultipliers::default(),
        }
    }
}

impl PricingConfig {
    /// Checks the pricing tables for values that would produce a degenerate quote.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_rate_per_mile <= Decimal::ZERO {
            return Err(invalid("base_rate_per_mile must be greater than zero"));
        }
        if self.fuel_surcharge_fraction < Decimal::ZERO {
            return Err(invalid("fuel_surcharge_fraction must not be negative"));
        }
        if self.target_margin_fraction < Decimal::ZERO || self.target_margin_fraction >= Decimal::ONE
        {
            return Err(invalid(
                "target_margin_fraction must be at least 0 and less than 1",
            ));
        }
        if self.heavy_load.multiplier <= Decimal::ZERO {
            return Err(invalid("heavy_load.multiplier must be greater than zero"));
        }
        for (name, multiplier) in self.equipment_multipliers.all() {
            if multiplier <= Decimal::ZERO {
                return Err(invalid(format!(
                    "equipment multiplier for {} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// One band in a scoring dimension.
///
/// A value scores the band with the highest `min` it reaches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreBand {
    /// Inclusive lower bound of the band.
    pub min: Decimal,
    /// Points awarded in this band.
    pub points: u32,
    /// Reason recorded when the band is awarded.
    pub reason: String,
}

impl ScoreBand {
    /// Creates a band.
    pub fn new(min: Decimal, points: u32, reason: impl Into<String>) -> Self {
        Self {
            min,
            points,
            reason: reason.into(),
        }
    }
}

/// Points awarded for verified insurance.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceBonus {
    /// Points awarded.
    pub points: u32,
    /// Reason recorded when awarded.
    pub reason: String,
}

/// Carrier scoring tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Bands over the carrier rating (0.0 to 5.0).
    pub rating: Vec<ScoreBand>,
    /// Bands over the on-time delivery percentage.
    pub on_time_delivery: Vec<ScoreBand>,
    /// Bands over the number of loads hauled.
    pub experience: Vec<ScoreBand>,
    /// Insurance bonus.
    pub insurance: InsuranceBonus,
    /// How many matches to return when the caller does not say.
    #[serde(default = "default_match_limit")]
    pub default_limit: usize,
}

fn default_match_limit() -> usize {
    DEFAULT_MATCH_LIMIT
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rating: vec![
                ScoreBand::new(Decimal::new(45, 1), 30, "Excellent rating"),
                ScoreBand::new(Decimal::new(40, 1), 20, "Good rating"),
                ScoreBand::new(Decimal::new(35, 1), 10, "Average rating"),
            ],
            on_time_delivery: vec![
                ScoreBand::new(Decimal::from(95), 30, "Excellent on-time delivery"),
                ScoreBand::new(Decimal::from(90), 20, "Good on-time delivery"),
                ScoreBand::new(Decimal::from(85), 10, "Average on-time delivery"),
            ],
            experience: vec![
                ScoreBand::new(Decimal::from(100), 20, "Highly experienced"),
                ScoreBand::new(Decimal::from(50), 15, "Experienced"),
                ScoreBand::new(Decimal::from(20), 10, "Moderately experienced"),
            ],
            insurance: InsuranceBonus {
                points: 20,
                reason: "Insurance verified".to_string(),
            },
            default_limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

impl ScoringConfig {
    /// The highest score a carrier can reach under these tables.
    ///
    /// Saturates at `u32::MAX` rather than wrapping.
    pub fn max_score(&self) -> u32 {
        let best = |bands: &[ScoreBand]| bands.iter().map(|b| b.points).max().unwrap_or(0);
        best(&self.rating)
            .saturating_add(best(&self.on_time_delivery))
            .saturating_add(best(&self.experience))
            .saturating_add(self.insurance.points)
    }

    /// Ensures scores stay within 0 to 100.
    pub fn validate(&self) -> EngineResult<()> {
        let max = self.max_score();
        if max > 100 {
            return Err(invalid(format!(
                "scoring bands can award up to {} points, the maximum is 100",
                max
            )));
        }
        Ok(())
    }
}

/// A rate adjustment keyed on the top match's score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationTier {
    /// Inclusive minimum score of the top match.
    pub min_score: u32,
    /// Multiplier applied to the calculated rate.
    pub multiplier: Decimal,
}

/// Rate recommendation tiers.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Tiers; the highest `min_score` the top match reaches wins.
    pub tiers: Vec<RecommendationTier>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                RecommendationTier {
                    min_score: 80,
                    multiplier: Decimal::new(95, 2),
                },
                RecommendationTier {
                    min_score: 60,
                    multiplier: Decimal::new(98, 2),
                },
            ],
        }
    }
}

impl RecommendationConfig {
    /// Rejects non-positive multipliers.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(tier) = self.tiers.iter().find(|t| t.multiplier <= Decimal::ZERO) {
            return Err(invalid(format!(
                "recommendation multiplier for min_score {} must be greater than zero",
                tier.min_score
            )));
        }
        Ok(())
    }
}

/// Matching configuration from matching.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingConfig {
    /// Scoring tables.
    pub scoring: ScoringConfig,
    /// Rate recommendation tiers.
    pub recommendation: RecommendationConfig,
}

/// The complete engine configuration.
///
/// Aggregates everything loaded from an engine configuration directory.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    pricing: PricingConfig,
    matching: MatchingConfig,
}

impl EngineConfig {
    /// Creates a validated configuration from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        pricing: PricingConfig,
        matching: MatchingConfig,
    ) -> EngineResult<Self> {
        pricing.validate()?;
        matching.scoring.validate()?;
        matching.recommendation.validate()?;
        Ok(Self {
            metadata,
            pricing,
            matching,
        })
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Returns the scoring tables.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.matching.scoring
    }

    /// Returns the recommendation tiers.
    pub fn recommendation(&self) -> &RecommendationConfig {
        &self.matching.recommendation
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}
