//! Carrier model and related types.
//!
//! Carriers are match candidates. The engine reads them but never mutates
//! them; identifiers such as MC and DOT numbers are opaque data.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Onboarding status of a carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierStatus {
    /// Awaiting review.
    Pending,
    /// Cleared to haul loads.
    Approved,
    /// Failed review.
    Rejected,
    /// Temporarily barred from hauling.
    Suspended,
}

/// A motor carrier that may be matched to a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    /// Opaque caller-supplied identifier.
    pub id: String,
    /// Legal or trading name.
    #[serde(default)]
    pub company_name: String,
    /// Motor carrier number, not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mc_number: Option<String>,
    /// DOT number, not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_number: Option<String>,
    /// Onboarding status.
    pub status: CarrierStatus,
    /// Whether the carrier's insurance certificate has been verified.
    pub insurance_verified: bool,
    /// Date the current insurance certificate expires, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<NaiveDate>,
    /// Average rating on a 0.0 to 5.0 scale.
    pub rating: Decimal,
    /// Number of loads hauled for the brokerage.
    pub total_loads: u32,
    /// Percentage of deliveries made on time, 0 to 100.
    pub on_time_delivery_rate: Decimal,
}

impl Carrier {
    /// Returns true if the carrier passes the matching eligibility gate:
    /// approved status and verified insurance.
    pub fn is_eligible(&self) -> bool {
        self.status == CarrierStatus::Approved && self.insurance_verified
    }

    /// Returns true if the insurance expires within `within_days` of `as_of`.
    ///
    /// Insurance that has already expired, or whose expiry is unknown, is not
    /// "expiring soon".
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use freight_engine::models::{Carrier, CarrierStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    /// let carrier = Carrier {
    ///     id: "CARR-1".to_string(),
    ///     company_name: "Top Carrier".to_string(),
    ///     mc_number: None,
    ///     dot_number: None,
    ///     status: CarrierStatus::Approved,
    ///     insurance_verified: true,
    ///     insurance_expiry: NaiveDate::from_ymd_opt(2026, 3, 21),
    ///     rating: Decimal::new(48, 1),
    ///     total_loads: 150,
    ///     on_time_delivery_rate: Decimal::from(96),
    /// };
    /// assert!(carrier.insurance_expiring_soon(today, 30));
    /// assert!(!carrier.insurance_expiring_soon(today, 10));
    /// ```
    pub fn insurance_expiring_soon(&self, as_of: NaiveDate, within_days: u32) -> bool {
        match self.insurance_expiry {
            Some(expiry) => {
                expiry >= as_of && expiry <= as_of + Duration::days(i64::from(within_days))
            }
            None => false,
        }
    }
}
