//! Carrier quality scoring.
//!
//! A carrier's score is the sum of four independent dimensions: rating,
//! on-time delivery, experience (loads hauled) and verified insurance. Within
//! a dimension only the highest band the carrier reaches is awarded, and each
//! awarded band contributes its reason to the match.

use rust_decimal::Decimal;

use crate::config::{ScoreBand, ScoringConfig};
use crate::models::{Carrier, CarrierMatch};

/// The highest score a carrier can be given.
pub const MAX_SCORE: u32 = 100;

/// Scores a single carrier, without applying the eligibility gate.
///
/// # Examples
///
/// ```
/// use freight_engine::calculation::score_carrier;
/// use freight_engine::config::ScoringConfig;
/// use freight_engine::models::{Carrier, CarrierStatus};
/// use rust_decimal::Decimal;
///
/// let carrier = Carrier {
///     id: "CARR-PERFECT".to_string(),
///     company_name: "Perfect Carrier".to_string(),
///     mc_number: None,
///     dot_number: None,
///     status: CarrierStatus::Approved,
///     insurance_verified: true,
///     insurance_expiry: None,
///     rating: Decimal::from(5),
///     total_loads: 200,
///     on_time_delivery_rate: Decimal::from(100),
/// };
///
/// let scored = score_carrier(&carrier, &ScoringConfig::default());
/// assert_eq!(scored.score, 100);
/// assert_eq!(scored.reasons.len(), 4);
/// ```
pub fn score_carrier(carrier: &Carrier, config: &ScoringConfig) -> CarrierMatch {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    let dimensions = [
        (carrier.rating, config.rating.as_slice()),
        (carrier.on_time_delivery_rate, config.on_time_delivery.as_slice()),
        (Decimal::from(carrier.total_loads), config.experience.as_slice()),
    ];

    for (value, bands) in dimensions {
        if let Some(band) = highest_band(value, bands) {
            score = score.saturating_add(band.points);
            reasons.push(band.reason.clone());
        }
    }

    if carrier.insurance_verified {
        score = score.saturating_add(config.insurance.points);
        reasons.push(config.insurance.reason.clone());
    }

    CarrierMatch {
        carrier: carrier.clone(),
        score: score.min(MAX_SCORE),
        reasons,
    }
}

/// Finds the band with the highest lower bound that `value` reaches.
fn highest_band(value: Decimal, bands: &[ScoreBand]) -> Option<&ScoreBand> {
    bands
        .iter()
        .filter(|band| value >= band.min)
        .max_by(|a, b| a.min.cmp(&b.min))
}
