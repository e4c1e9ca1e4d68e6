//! Carrier match model.

use serde::{Deserialize, Serialize};

use super::Carrier;

/// A scored carrier with the reasons behind its score.
///
/// Built fresh for every matching call. `reasons` lists the scoring bands the
/// carrier fell into, in dimension order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierMatch {
    /// The candidate carrier, unmodified.
    pub carrier: Carrier,
    /// Quality score from 0 to 100.
    pub score: u32,
    /// Human-readable justifications, one per awarded band.
    pub reasons: Vec<String>,
}

impl CarrierMatch {
    /// Returns the carrier's identifier.
    pub fn carrier_id(&self) -> &str {
        &self.carrier.id
    }
}
