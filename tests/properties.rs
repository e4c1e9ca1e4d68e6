//! Property tests for the pricing and matching calculations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use freight_engine::calculation::{
    calculate_distance, calculate_margin, calculate_rate, find_matching_carriers,
    get_recommended_rate, EARTH_RADIUS_MILES, MAX_SCORE,
};
use freight_engine::config::{PricingConfig, RecommendationConfig, ScoringConfig};
use freight_engine::models::{Carrier, CarrierStatus, EquipmentClass, Shipment};

// =============================================================================
// Strategies
// =============================================================================

fn equipment_class() -> impl Strategy<Value = EquipmentClass> {
    prop_oneof![
        Just(EquipmentClass::DryVan),
        Just(EquipmentClass::Reefer),
        Just(EquipmentClass::Flatbed),
        Just(EquipmentClass::StepDeck),
        Just(EquipmentClass::Tanker),
        Just(EquipmentClass::Other),
    ]
}

fn carrier_status() -> impl Strategy<Value = CarrierStatus> {
    prop_oneof![
        Just(CarrierStatus::Pending),
        Just(CarrierStatus::Approved),
        Just(CarrierStatus::Rejected),
        Just(CarrierStatus::Suspended),
    ]
}

fn carrier() -> impl Strategy<Value = Carrier> {
    (
        0u32..10_000,
        carrier_status(),
        any::<bool>(),
        0i64..=50,
        0u32..500,
        0i64..=1000,
    )
        .prop_map(|(n, status, insurance_verified, rating, total_loads, on_time)| Carrier {
            id: format!("CARR-{}", n),
            company_name: String::new(),
            mc_number: None,
            dot_number: None,
            status,
            insurance_verified,
            insurance_expiry: None,
            rating: Decimal::new(rating, 1),
            total_loads,
            on_time_delivery_rate: Decimal::new(on_time, 1),
        })
}

fn shipment() -> Shipment {
    Shipment {
        id: None,
        distance_miles: Decimal::from(500),
        weight_pounds: Decimal::from(40000),
        equipment_class: EquipmentClass::DryVan,
    }
}

// =============================================================================
// Rate quotes
// =============================================================================

fn quote(miles: Decimal, weight: i64, class: EquipmentClass) -> freight_engine::models::RateQuote {
    calculate_rate(miles, Decimal::from(weight), class, None, &PricingConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn dry_van_carrier_rate_is_distance_times_two_thirty(cents in 1i64..1_000_000) {
        let miles = Decimal::new(cents, 2);
        let expected = (miles * Decimal::new(2, 0) * Decimal::new(115, 2))
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);

        prop_assert_eq!(quote(miles, 40000, EquipmentClass::DryVan).total_carrier_rate, expected);
    }

    #[test]
    fn reefer_base_rate_is_dry_van_times_one_point_three(
        miles in 1i64..5000,
        weight in 1i64..=40_000,
    ) {
        let miles = Decimal::from(miles);
        let reefer = quote(miles, weight, EquipmentClass::Reefer);
        let dry_van = quote(miles, weight, EquipmentClass::DryVan);

        prop_assert_eq!(reefer.base_rate, dry_van.base_rate * Decimal::new(13, 1));
    }

    #[test]
    fn heavy_load_multiplier_applies_only_above_threshold(
        miles in 1i64..5000,
        light in 1i64..=40_000,
        heavy in 40_001i64..80_000,
    ) {
        let miles = Decimal::from(miles);
        let light = quote(miles, light, EquipmentClass::DryVan);
        let heavy = quote(miles, heavy, EquipmentClass::DryVan);

        prop_assert_eq!(light.base_rate, miles * Decimal::new(2, 0));
        prop_assert_eq!(heavy.base_rate, light.base_rate * Decimal::new(11, 1));
    }

    #[test]
    fn carrier_rate_is_base_plus_fuel(
        miles in 1i64..5000,
        weight in 1i64..80_000,
        class in equipment_class(),
    ) {
        let quote = calculate_rate(
            Decimal::from(miles),
            Decimal::from(weight),
            class,
            None,
            &PricingConfig::default(),
        ).unwrap();

        prop_assert_eq!(quote.base_rate + quote.fuel_surcharge, quote.total_carrier_rate);
    }

    #[test]
    fn customer_rate_covers_carrier_rate(
        miles in 1i64..5000,
        weight in 1i64..80_000,
        class in equipment_class(),
        margin_pct in 0i64..100,
    ) {
        let margin = Decimal::new(margin_pct, 2);
        let quote = calculate_rate(
            Decimal::from(miles),
            Decimal::from(weight),
            class,
            Some(margin),
            &PricingConfig::default(),
        ).unwrap();

        prop_assert!(quote.suggested_customer_rate >= quote.total_carrier_rate);
        prop_assert!(quote.margin >= Decimal::ZERO);
        prop_assert_eq!(quote.margin_percentage, Decimal::from(margin_pct));
    }

    #[test]
    fn heavier_loads_never_cost_less(
        miles in 1i64..5000,
        lighter in 1i64..80_000,
        extra in 0i64..40_000,
        class in equipment_class(),
    ) {
        let config = PricingConfig::default();
        let light = calculate_rate(
            Decimal::from(miles), Decimal::from(lighter), class, None, &config,
        ).unwrap();
        let heavy = calculate_rate(
            Decimal::from(miles), Decimal::from(lighter + extra), class, None, &config,
        ).unwrap();

        prop_assert!(heavy.total_carrier_rate >= light.total_carrier_rate);
    }

    #[test]
    fn no_equipment_is_cheaper_than_dry_van(
        miles in 1i64..5000,
        weight in 1i64..80_000,
        class in equipment_class(),
    ) {
        let config = PricingConfig::default();
        let dry_van = calculate_rate(
            Decimal::from(miles), Decimal::from(weight), EquipmentClass::DryVan, None, &config,
        ).unwrap();
        let other = calculate_rate(
            Decimal::from(miles), Decimal::from(weight), class, None, &config,
        ).unwrap();

        prop_assert!(other.base_rate >= dry_van.base_rate);
    }

    #[test]
    fn non_positive_distance_is_rejected(miles in -5000i64..=0) {
        let result = calculate_rate(
            Decimal::from(miles),
            Decimal::from(1000),
            EquipmentClass::DryVan,
            None,
            &PricingConfig::default(),
        );

        prop_assert!(result.is_err());
    }
}

// =============================================================================
// Margins
// =============================================================================

proptest! {
    #[test]
    fn margin_matches_rate_difference(customer in 1i64..1_000_000, carrier in 0i64..1_000_000) {
        let customer = Decimal::new(customer, 2);
        let carrier = Decimal::new(carrier, 2);
        let breakdown = calculate_margin(customer, carrier).unwrap();

        // Both rates have two decimal places, so the difference is exact
        prop_assert_eq!(breakdown.margin, customer - carrier);
        prop_assert!(breakdown.margin_percentage <= Decimal::ONE_HUNDRED);
    }
}

// =============================================================================
// Distances
// =============================================================================

proptest! {
    #[test]
    fn distance_is_symmetric(
        lat1 in -90.0f64..=90.0,
        lng1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0,
        lng2 in -180.0f64..=180.0,
    ) {
        let there = calculate_distance(lat1, lng1, lat2, lng2).unwrap();
        let back = calculate_distance(lat2, lng2, lat1, lng1).unwrap();

        prop_assert_eq!(there, back);
    }

    #[test]
    fn distance_is_bounded_by_half_circumference(
        lat1 in -90.0f64..=90.0,
        lng1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0,
        lng2 in -180.0f64..=180.0,
    ) {
        let miles = calculate_distance(lat1, lng1, lat2, lng2).unwrap();
        let half_circumference = (std::f64::consts::PI * EARTH_RADIUS_MILES).ceil() as u32;

        prop_assert!(miles <= half_circumference);
    }

    #[test]
    fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        prop_assert_eq!(calculate_distance(lat, lng, lat, lng).unwrap(), 0);
    }
}

// =============================================================================
// Matching
// =============================================================================

proptest! {
    #[test]
    fn matches_are_eligible_ranked_and_limited(
        carriers in prop::collection::vec(carrier(), 0..40),
        limit in prop::option::of(0usize..20),
    ) {
        let config = ScoringConfig::default();
        let matches = find_matching_carriers(&shipment(), &carriers, limit, &config);

        let eligible = carriers.iter().filter(|c| c.is_eligible()).count();
        let expected_len = eligible.min(limit.unwrap_or(config.default_limit));
        prop_assert_eq!(matches.len(), expected_len);

        for m in &matches {
            prop_assert!(m.carrier.is_eligible());
            prop_assert!(m.score <= MAX_SCORE);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn recommendation_never_raises_the_rate(
        carriers in prop::collection::vec(carrier(), 0..20),
        rate_cents in 1i64..10_000_000,
    ) {
        let matches = find_matching_carriers(&shipment(), &carriers, None, &ScoringConfig::default());
        let rate = Decimal::new(rate_cents, 2);
        let recommended = get_recommended_rate(&matches, rate, &RecommendationConfig::default());

        prop_assert!(recommended <= rate);
        prop_assert!(recommended >= rate * Decimal::new(95, 2));
    }
}
