//! Core data models for the freight engine.
//!
//! This module contains all the domain models used throughout the engine.

mod carrier;
mod carrier_match;
mod quote_result;
mod shipment;

pub use carrier::{Carrier, CarrierStatus};
pub use carrier_match::CarrierMatch;
pub use quote_result::{
    AuditStep, AuditTrace, AuditWarning, MarginBreakdown, QuoteResult, RateQuote,
};
pub use shipment::{EquipmentClass, Shipment};
