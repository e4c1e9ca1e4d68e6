//! Carrier matching for a shipment.
//!
//! Matching applies a hard eligibility gate (approved status and verified
//! insurance), scores every eligible carrier, ranks them by score and keeps
//! the best few. Ineligible carriers are dropped silently. Matching never
//! fails: an empty or fully ineligible carrier list yields no matches.

use tracing::debug;

use crate::config::ScoringConfig;
use crate::models::{Carrier, CarrierMatch, Shipment};

use super::score_carrier;

/// Number of matches returned when the caller does not give a limit.
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Finds the best carriers for a shipment.
///
/// Returns at most `limit` matches (the configured default limit when
/// `None`), ordered by score descending. Carriers with equal scores keep
/// their input order.
///
/// # Examples
///
/// ```
/// use freight_engine::calculation::find_matching_carriers;
/// use freight_engine::config::ScoringConfig;
/// use freight_engine::models::{Carrier, CarrierStatus, EquipmentClass, Shipment};
/// use rust_decimal::Decimal;
///
/// let shipment = Shipment {
///     id: Some("LOAD-1".to_string()),
///     distance_miles: Decimal::from(500),
///     weight_pounds: Decimal::from(40000),
///     equipment_class: EquipmentClass::DryVan,
/// };
/// let pending = Carrier {
///     id: "CARR-PENDING".to_string(),
///     company_name: "New Carrier".to_string(),
///     mc_number: None,
///     dot_number: None,
///     status: CarrierStatus::Pending,
///     insurance_verified: true,
///     insurance_expiry: None,
///     rating: Decimal::from(5),
///     total_loads: 500,
///     on_time_delivery_rate: Decimal::from(100),
/// };
///
/// let matches = find_matching_carriers(&shipment, &[pending], None, &ScoringConfig::default());
/// assert!(matches.is_empty());
/// ```
pub fn find_matching_carriers(
    shipment: &Shipment,
    carriers: &[Carrier],
    limit: Option<usize>,
    config: &ScoringConfig,
) -> Vec<CarrierMatch> {
    let limit = limit.unwrap_or(config.default_limit);

    let mut matches: Vec<CarrierMatch> = carriers
        .iter()
        .filter(|carrier| carrier.is_eligible())
        .map(|carrier| score_carrier(carrier, config))
        .collect();
    let eligible_count = matches.len();

    // sort_by is stable; ties keep input order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);

    debug!(
        shipment_id = shipment.id.as_deref().unwrap_or("-"),
        equipment_class = %shipment.equipment_class,
        candidates = carriers.len(),
        eligible = eligible_count,
        returned = matches.len(),
        top_score = matches.first().map(|m| m.score),
        "Matched carriers"
    );

    matches
}
