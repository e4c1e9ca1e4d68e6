//! Great-circle distance between two coordinates.

use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Mean Earth radius used for distance calculation, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculates the haversine distance between two points, in whole miles.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if a coordinate is not finite, a
/// latitude is outside [-90, 90], or a longitude is outside [-180, 180].
///
/// # Examples
///
/// ```
/// use freight_engine::calculation::calculate_distance;
///
/// // Dallas, TX to Denver, CO
/// let miles = calculate_distance(32.7767, -96.797, 39.7392, -104.9903).unwrap();
/// assert_eq!(miles, 663);
/// ```
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> EngineResult<u32> {
    check_latitude("lat1", lat1)?;
    check_longitude("lng1", lng1)?;
    check_latitude("lat2", lat2)?;
    check_longitude("lng2", lng2)?;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let miles = (EARTH_RADIUS_MILES * c).round() as u32;

    debug!(lat1, lng1, lat2, lng2, miles, "Calculated great-circle distance");

    Ok(miles)
}

fn check_latitude(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || !(-90.0..=90.0).contains(&value) {
        return Err(EngineError::invalid_input(
            field,
            format!("latitude must be between -90 and 90, got {}", value),
        ));
    }
    Ok(())
}

fn check_longitude(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || !(-180.0..=180.0).contains(&value) {
        return Err(EngineError::invalid_input(
            field,
            format!("longitude must be between -180 and 180, got {}", value),
        ));
    }
    Ok(())
}
