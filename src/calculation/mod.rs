//! Calculation logic for the freight engine.
//!
//! This module contains the pricing functions (rate quotes, margins and
//! great-circle distance) and the carrier matching functions (scoring,
//! ranking and match-based rate recommendation). Everything here is a pure,
//! synchronous function over its inputs and a configuration table.

mod carrier_matching;
mod carrier_scoring;
mod distance;
mod margin;
mod rate_quote;
mod recommended_rate;
mod rounding;

pub use carrier_matching::{DEFAULT_MATCH_LIMIT, find_matching_carriers};
pub use carrier_scoring::{MAX_SCORE, score_carrier};
pub use distance::{EARTH_RADIUS_MILES, calculate_distance};
pub use margin::calculate_margin;
pub use rate_quote::{
    BASE_RATE_PER_MILE, FUEL_SURCHARGE_FRACTION, HEAVY_LOAD_MULTIPLIER,
    HEAVY_LOAD_THRESHOLD_POUNDS, RateCalculation, TARGET_MARGIN_FRACTION, calculate_rate,
    calculate_rate_with_audit,
};
pub use recommended_rate::get_recommended_rate;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
