//! Margin calculation for an agreed customer and carrier rate.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::MarginBreakdown;

use super::round_currency;

/// Calculates the broker margin between a customer rate and a carrier rate.
///
/// The percentage is taken against the customer rate and reported on a
/// 0 to 100 scale. A carrier rate above the customer rate yields a negative
/// margin.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `customer_rate` is zero or
/// negative, or if the rates are too far apart to represent the margin.
///
/// # Examples
///
/// ```
/// use freight_engine::calculation::calculate_margin;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_margin(Decimal::from(1000), Decimal::from(800)).unwrap();
/// assert_eq!(breakdown.margin, Decimal::from(200));
/// assert_eq!(breakdown.margin_percentage, Decimal::from(20));
/// ```
pub fn calculate_margin(customer_rate: Decimal, carrier_rate: Decimal) -> EngineResult<MarginBreakdown> {
    if customer_rate <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "customer_rate",
            format!("must be greater than zero, got {}", customer_rate),
        ));
    }

    let margin = customer_rate
        .checked_sub(carrier_rate)
        .ok_or_else(|| too_large("carrier_rate"))?;
    let margin_percentage = margin
        .checked_div(customer_rate)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| too_large("customer_rate"))?;

    Ok(MarginBreakdown {
        margin: round_currency(margin),
        margin_percentage: round_currency(margin_percentage),
    })
}

fn too_large(field: &str) -> EngineError {
    EngineError::invalid_input(field, "is too large to price")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_twenty_percent_margin() {
        let breakdown = calculate_margin(dec("1000"), dec("800")).unwrap();

        assert_eq!(breakdown.margin, dec("200"));
        assert_eq!(breakdown.margin_percentage, dec("20"));
    }

    #[test]
    fn test_repeating_percentage_rounds_to_two_places() {
        let breakdown = calculate_margin(dec("1500"), dec("1200")).unwrap();
        assert_eq!(breakdown.margin_percentage, dec("20"));

        // 100 / 300 = 33.333...%
        let breakdown = calculate_margin(dec("300"), dec("200")).unwrap();
        assert_eq!(breakdown.margin, dec("100"));
        assert_eq!(breakdown.margin_percentage, dec("33.33"));
    }

    #[test]
    fn test_loss_making_load_has_negative_margin() {
        let breakdown = calculate_margin(dec("900"), dec("1000")).unwrap();

        assert_eq!(breakdown.margin, dec("-100"));
        assert_eq!(breakdown.margin_percentage, dec("-11.11"));
    }

    #[test]
    fn test_zero_customer_rate_is_rejected() {
        match calculate_margin(Decimal::ZERO, dec("800")) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "customer_rate"),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_customer_rate_is_rejected() {
        assert!(calculate_margin(dec("-5"), dec("800")).is_err());
    }

    #[test]
    fn test_margin_overflow_is_rejected() {
        match calculate_margin(Decimal::MAX, -Decimal::MAX) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "carrier_rate");
                assert_eq!(message, "is too large to price");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_percentage_overflow_is_rejected() {
        // A one-cent customer rate against a huge carrier rate
        let result = calculate_margin(dec("0.01"), dec("-1000000000000000000000000000"));
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        // Margin -0.005 rounds to -0.01; -0.0005% rounds to zero
        let breakdown = calculate_margin(dec("1000"), dec("1000.005")).unwrap();
        assert_eq!(breakdown.margin, dec("-0.01"));
        assert_eq!(breakdown.margin_percentage, dec("0"));
    }

    #[test]
    fn test_quote_margin_round_trips_through_calculate_margin() {
        // 1437.50 customer, 1150 carrier from a default 500-mile dry van quote
        let breakdown = calculate_margin(dec("1437.50"), dec("1150")).unwrap();

        assert_eq!(breakdown.margin, dec("287.50"));
        assert_eq!(breakdown.margin_percentage, dec("20"));
    }
}
