//! Rate quote calculation.
//!
//! Converts a shipment's distance, weight and equipment class into the rate
//! paid to the carrier and the rate suggested to the customer. The per-mile
//! rate starts from the base rate, is scaled by the equipment multiplier and,
//! for shipments over the heavy-load threshold, by the heavy-load multiplier.
//! A fuel surcharge is added on top of the linehaul, and the customer rate is
//! grossed up so that the margin is the requested fraction of the customer
//! rate.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, EquipmentClass, RateQuote};

use super::round_currency;

/// Starting linehaul rate in USD per mile.
pub const BASE_RATE_PER_MILE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Fuel surcharge as a fraction of the linehaul.
pub const FUEL_SURCHARGE_FRACTION: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Margin held on the customer rate unless the caller overrides it.
pub const TARGET_MARGIN_FRACTION: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Shipments heavier than this pay the heavy-load multiplier.
pub const HEAVY_LOAD_THRESHOLD_POUNDS: Decimal = Decimal::from_parts(40000, 0, 0, false, 0);

/// Per-mile multiplier for heavy shipments.
pub const HEAVY_LOAD_MULTIPLIER: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

/// A rate quote together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct RateCalculation {
    /// The priced quote.
    pub quote: RateQuote,
    /// One audit step per pricing stage.
    pub audit_steps: Vec<AuditStep>,
    /// Fallbacks taken while pricing.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates a rate quote for a shipment.
///
/// `margin_override_fraction` replaces the configured target margin; it is a
/// fraction (0.25 for 25%), not a percentage.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the distance or weight is not
/// positive, or when the margin fraction is outside `[0, 1)`.
///
/// # Examples
///
/// ```
/// use freight_engine::calculation::calculate_rate;
/// use freight_engine::config::PricingConfig;
/// use freight_engine::models::EquipmentClass;
/// use rust_decimal::Decimal;
///
/// let quote = calculate_rate(
///     Decimal::from(500),
///     Decimal::from(40000),
///     EquipmentClass::DryVan,
///     None,
///     &PricingConfig::default(),
/// )
/// .unwrap();
///
/// // 500 miles × $2.00 = $1000, plus 15% fuel = $1150
/// assert_eq!(quote.base_rate, Decimal::from(1000));
/// assert_eq!(quote.total_carrier_rate, Decimal::from(1150));
/// // $1150 / (1 - 0.20) = $1437.50
/// assert_eq!(quote.suggested_customer_rate, Decimal::new(143750, 2));
/// ```
pub fn calculate_rate(
    distance_miles: Decimal,
    weight_pounds: Decimal,
    equipment_class: EquipmentClass,
    margin_override_fraction: Option<Decimal>,
    config: &PricingConfig,
) -> EngineResult<RateQuote> {
    calculate_rate_with_audit(
        distance_miles,
        weight_pounds,
        equipment_class,
        margin_override_fraction,
        config,
        1,
    )
    .map(|calculation| calculation.quote)
}

/// Calculates a rate quote and records each pricing stage as an audit step.
///
/// Steps are numbered from `step_number`. See [`calculate_rate`] for the
/// pricing rules and error conditions.
pub fn calculate_rate_with_audit(
    distance_miles: Decimal,
    weight_pounds: Decimal,
    equipment_class: EquipmentClass,
    margin_override_fraction: Option<Decimal>,
    config: &PricingConfig,
    step_number: u32,
) -> EngineResult<RateCalculation> {
    if distance_miles <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "distance_miles",
            format!("must be greater than zero, got {}", distance_miles),
        ));
    }
    if weight_pounds <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "weight_pounds",
            format!("must be greater than zero, got {}", weight_pounds),
        ));
    }
    let margin_fraction = margin_override_fraction.unwrap_or(config.target_margin_fraction);
    if margin_fraction < Decimal::ZERO || margin_fraction >= Decimal::ONE {
        return Err(EngineError::invalid_input(
            "margin_override",
            format!(
                "must be a fraction at least 0 and less than 1, got {}",
                margin_fraction
            ),
        ));
    }

    let mut warnings = Vec::new();
    if equipment_class == EquipmentClass::Other {
        warnings.push(AuditWarning {
            code: "UNKNOWN_EQUIPMENT".to_string(),
            message: "Unrecognized equipment class priced with a 1.0 multiplier".to_string(),
            severity: "low".to_string(),
        });
    }

    // Per-mile rate
    let equipment_multiplier = config
        .equipment_multipliers
        .multiplier_for(equipment_class);
    let heavy_load_applied = weight_pounds > config.heavy_load.threshold_pounds;
    let mut rate_per_mile = config
        .base_rate_per_mile
        .checked_mul(equipment_multiplier)
        .ok_or_else(per_mile_overflow)?;
    if heavy_load_applied {
        rate_per_mile = rate_per_mile
            .checked_mul(config.heavy_load.multiplier)
            .ok_or_else(per_mile_overflow)?;
    }

    let per_mile_step = AuditStep {
        step_number,
        rule_id: "per_mile_rate".to_string(),
        rule_name: "Per-Mile Rate".to_string(),
        input: serde_json::json!({
            "base_rate_per_mile": config.base_rate_per_mile.normalize().to_string(),
            "equipment_class": equipment_class.as_str(),
            "weight_pounds": weight_pounds.normalize().to_string(),
            "heavy_load_threshold_pounds": config.heavy_load.threshold_pounds.normalize().to_string()
        }),
        output: serde_json::json!({
            "equipment_multiplier": equipment_multiplier.normalize().to_string(),
            "heavy_load_applied": heavy_load_applied,
            "rate_per_mile": rate_per_mile.normalize().to_string()
        }),
        reasoning: if heavy_load_applied {
            format!(
                "${} × {} ({}) × {} (over {} lbs) = ${} per mile",
                config.base_rate_per_mile.normalize(),
                equipment_multiplier.normalize(),
                equipment_class,
                config.heavy_load.multiplier.normalize(),
                config.heavy_load.threshold_pounds.normalize(),
                rate_per_mile.normalize()
            )
        } else {
            format!(
                "${} × {} ({}) = ${} per mile",
                config.base_rate_per_mile.normalize(),
                equipment_multiplier.normalize(),
                equipment_class,
                rate_per_mile.normalize()
            )
        },
    };

    // Linehaul and fuel
    let base_rate = distance_miles
        .checked_mul(rate_per_mile)
        .ok_or_else(|| too_large("distance_miles"))?;
    let fuel_surcharge = base_rate
        .checked_mul(config.fuel_surcharge_fraction)
        .ok_or_else(|| too_large("distance_miles"))?;
    let total_carrier_rate = base_rate
        .checked_add(fuel_surcharge)
        .ok_or_else(|| too_large("distance_miles"))?;

    let carrier_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "carrier_rate".to_string(),
        rule_name: "Carrier Rate".to_string(),
        input: serde_json::json!({
            "distance_miles": distance_miles.normalize().to_string(),
            "rate_per_mile": rate_per_mile.normalize().to_string(),
            "fuel_surcharge_fraction": config.fuel_surcharge_fraction.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_rate": base_rate.normalize().to_string(),
            "fuel_surcharge": fuel_surcharge.normalize().to_string(),
            "total_carrier_rate": total_carrier_rate.normalize().to_string()
        }),
        reasoning: format!(
            "{} miles × ${} = ${}, plus {} fuel = ${}",
            distance_miles.normalize(),
            rate_per_mile.normalize(),
            base_rate.normalize(),
            config.fuel_surcharge_fraction.normalize(),
            total_carrier_rate.normalize()
        ),
    };

    // Customer pricing
    let suggested_customer_rate = total_carrier_rate
        .checked_div(Decimal::ONE - margin_fraction)
        .ok_or_else(|| too_large("distance_miles"))?;
    let margin = suggested_customer_rate
        .checked_sub(total_carrier_rate)
        .ok_or_else(|| too_large("distance_miles"))?;

    let customer_step = AuditStep {
        step_number: step_number + 2,
        rule_id: "customer_rate".to_string(),
        rule_name: "Suggested Customer Rate".to_string(),
        input: serde_json::json!({
            "total_carrier_rate": total_carrier_rate.normalize().to_string(),
            "margin_fraction": margin_fraction.normalize().to_string(),
            "margin_overridden": margin_override_fraction.is_some()
        }),
        output: serde_json::json!({
            "suggested_customer_rate": round_currency(suggested_customer_rate).to_string(),
            "margin": round_currency(margin).to_string()
        }),
        reasoning: format!(
            "${} / (1 - {}) = ${}",
            total_carrier_rate.normalize(),
            margin_fraction.normalize(),
            round_currency(suggested_customer_rate)
        ),
    };

    let quote = RateQuote {
        base_rate: round_currency(base_rate),
        fuel_surcharge: round_currency(fuel_surcharge),
        total_carrier_rate: round_currency(total_carrier_rate),
        suggested_customer_rate: round_currency(suggested_customer_rate),
        margin: round_currency(margin),
        margin_percentage: round_currency(margin_fraction * Decimal::ONE_HUNDRED),
    };

    debug!(
        distance_miles = %distance_miles,
        weight_pounds = %weight_pounds,
        equipment_class = %equipment_class,
        total_carrier_rate = %quote.total_carrier_rate,
        suggested_customer_rate = %quote.suggested_customer_rate,
        "Calculated rate quote"
    );

    Ok(RateCalculation {
        quote,
        audit_steps: vec![per_mile_step, carrier_step, customer_step],
        warnings,
    })
}

fn too_large(field: &str) -> EngineError {
    EngineError::invalid_input(field, "is too large to price")
}

fn per_mile_overflow() -> EngineError {
    EngineError::InvalidConfig {
        message: "per-mile rate overflows".to_string(),
    }
}
