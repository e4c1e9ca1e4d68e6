//! Request types for the freight engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Carrier, EquipmentClass, Shipment};

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Optional shipment identifier echoed back in the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    /// Linehaul distance in miles.
    pub distance_miles: Decimal,
    /// Gross weight in pounds.
    pub weight_pounds: Decimal,
    /// The required equipment class.
    pub equipment_class: EquipmentClass,
    /// Margin to hold instead of the configured target, as a fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_override: Option<Decimal>,
}

/// Request body for the `/margin` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginRequest {
    /// What the customer pays.
    pub customer_rate: Decimal,
    /// What the carrier is paid.
    pub carrier_rate: Decimal,
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Request body for the `/distance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    /// Pickup location.
    pub origin: Coordinate,
    /// Delivery location.
    pub destination: Coordinate,
}

/// Request body for the `/match` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    /// The shipment to match.
    pub shipment: Shipment,
    /// Candidate carriers.
    pub carriers: Vec<Carrier>,
    /// Maximum number of matches to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// A calculated rate to adjust by match quality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_rate: Option<Decimal>,
}
