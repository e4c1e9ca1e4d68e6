//! Rate recommendation based on match quality.
//!
//! A strong top carrier justifies offering a slightly lower rate. Only the
//! top-ranked match is considered.

use rust_decimal::Decimal;

use crate::config::RecommendationConfig;
use crate::models::CarrierMatch;

/// Adjusts a calculated rate according to the best match's score.
///
/// With the default tiers a top score of 80 or more takes 5% off, 60 or more
/// takes 2% off, and anything lower (or no matches at all) leaves the rate
/// unchanged. The result is not rounded.
///
/// # Examples
///
/// ```
/// use freight_engine::calculation::get_recommended_rate;
/// use freight_engine::config::RecommendationConfig;
/// use rust_decimal::Decimal;
///
/// let rate = get_recommended_rate(&[], Decimal::from(1000), &RecommendationConfig::default());
/// assert_eq!(rate, Decimal::from(1000));
/// ```
pub fn get_recommended_rate(
    matches: &[CarrierMatch],
    calculated_rate: Decimal,
    config: &RecommendationConfig,
) -> Decimal {
    let Some(top) = matches.first() else {
        return calculated_rate;
    };

    config
        .tiers
        .iter()
        .filter(|tier| top.score >= tier.min_score)
        .max_by_key(|tier| tier.min_score)
        .map(|tier| calculated_rate * tier.multiplier)
        .unwrap_or(calculated_rate)
}
