//! Quote result models for the freight engine.
//!
//! This module contains the [`RateQuote`] produced by the rate engine, the
//! [`MarginBreakdown`] for an existing customer/carrier pair, and the
//! [`QuoteResult`] envelope that the HTTP API returns together with its
//! audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A carrier-side and customer-side price for a shipment.
///
/// All amounts are rounded to 2 decimal places. `margin_percentage` is on
/// a 0 to 100 scale.
///
/// # Example
///
/// ```
/// use freight_engine::models::RateQuote;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let quote = RateQuote {
///     base_rate: Decimal::from_str("1000.00").unwrap(),
///     fuel_surcharge: Decimal::from_str("150.00").unwrap(),
///     total_carrier_rate: Decimal::from_str("1150.00").unwrap(),
///     suggested_customer_rate: Decimal::from_str("1437.50").unwrap(),
///     margin: Decimal::from_str("287.50").unwrap(),
///     margin_percentage: Decimal::from_str("20.00").unwrap(),
/// };
/// assert_eq!(quote.total_carrier_rate, quote.base_rate + quote.fuel_surcharge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Linehaul amount: distance times the adjusted per-mile rate.
    pub base_rate: Decimal,
    /// Fuel pass-through on top of the linehaul.
    pub fuel_surcharge: Decimal,
    /// What the broker pays the carrier.
    pub total_carrier_rate: Decimal,
    /// What the broker should charge the customer to hold the target margin.
    pub suggested_customer_rate: Decimal,
    /// Customer rate minus carrier rate.
    pub margin: Decimal,
    /// Margin as a percentage of the customer rate.
    pub margin_percentage: Decimal,
}

/// Margin figures for an agreed customer and carrier rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginBreakdown {
    /// Customer rate minus carrier rate, rounded to 2 decimal places.
    pub margin: Decimal,
    /// Margin as a percentage of the customer rate, rounded to 2 decimal places.
    pub margin_percentage: Decimal,
}

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while pricing.
///
/// Warnings flag fallbacks that do not prevent a quote but deserve a look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pricing steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while pricing.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The envelope returned for a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The shipment identifier, when the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    /// The priced quote.
    pub quote: RateQuote,
    /// Audit trace of pricing decisions.
    pub audit_trace: AuditTrace,
}
