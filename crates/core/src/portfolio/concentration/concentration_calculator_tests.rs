//! Unit tests for concentration scoring.

use super::*;
use crate::holdings::{AssetClass, CryptoHolding, Holding};
use crate::portfolio::net_worth::{summarize_classes, ClassTotals};
use crate::settings::AnalyticsSettings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

fn entries(values: &[(&str, Decimal)]) -> Vec<WeightedEntry> {
    values
        .iter()
        .map(|(id, value)| WeightedEntry::new(*id, *value))
        .collect()
}

// ==================== Diversification score ====================

#[test]
fn test_single_position_scores_zero() {
    let set = entries(&[("RELIANCE", dec!(500000))]);
    let result = analyze_concentration(&set, None, dec!(20));

    assert_eq!(result.hhi, Decimal::ONE);
    assert_eq!(result.diversification_score, 0);
    assert_eq!(result.overexposed_positions.len(), 1);
    assert_eq!(result.overexposed_positions[0].weight_percent, dec!(100));
}

#[test]
fn test_four_equal_positions_score_75() {
    let set = entries(&[
        ("A", dec!(250)),
        ("B", dec!(250)),
        ("C", dec!(250)),
        ("D", dec!(250)),
    ]);

    let result = analyze_concentration(&set, None, dec!(20));

    assert_eq!(result.hhi, dec!(0.25));
    assert_eq!(result.diversification_score, 75);
    // 25% each is above the 20% threshold
    assert_eq!(result.overexposed_positions.len(), 4);
}

#[test]
fn test_score_grows_with_equal_positions() {
    let three = entries(&[("A", dec!(1)), ("B", dec!(1)), ("C", dec!(1))]);
    assert_eq!(diversification_score(&three, None), 67);

    let ten: Vec<WeightedEntry> = (0..10)
        .map(|i| WeightedEntry::new(format!("S{}", i), dec!(100)))
        .collect();
    assert_eq!(diversification_score(&ten, None), 90);
}

#[test]
fn test_empty_and_zero_total_score_zero() {
    let empty: Vec<WeightedEntry> = Vec::new();
    assert_eq!(analyze_concentration(&empty, None, dec!(20)), ConcentrationResult::empty());

    let zeros = entries(&[("A", Decimal::ZERO), ("B", Decimal::ZERO)]);
    let result = analyze_concentration(&zeros, None, dec!(20));
    assert_eq!(result.diversification_score, 0);
    assert!(!result.has_overexposure());

    let explicit_zero = entries(&[("A", dec!(10))]);
    assert_eq!(diversification_score(&explicit_zero, Some(Decimal::ZERO)), 0);
}

#[test]
fn test_explicit_total_is_used() {
    // Two positions of 100 inside a 400 portfolio: weights 25% each
    let set = entries(&[("A", dec!(100)), ("B", dec!(100))]);
    let result = analyze_concentration(&set, Some(dec!(400)), dec!(20));

    assert_eq!(result.hhi, dec!(0.125));
    assert_eq!(result.diversification_score, 88);
    assert_eq!(result.overexposed_positions[0].weight_percent, dec!(25));
}

// ==================== Overexposure ====================

#[test]
fn test_threshold_is_strict() {
    let at_threshold = entries(&[("AT", dec!(20)), ("REST", dec!(80))]);
    let flagged = overexposed_positions(&at_threshold, None, dec!(20));
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].identifier, "REST");

    let above = entries(&[("ABOVE", dec!(20.01)), ("REST", dec!(79.99))]);
    let flagged = overexposed_positions(&above, None, dec!(20));
    let ids: Vec<&str> = flagged.iter().map(|p| p.identifier.as_str()).collect();
    assert_eq!(ids, vec!["ABOVE", "REST"]);
    assert_eq!(flagged[0].weight_percent, dec!(20.0));
    assert_eq!(flagged[1].weight_percent, dec!(80.0));
}

#[test]
fn test_weights_rounded_to_one_decimal_in_input_order() {
    let set = entries(&[("X", dec!(1)), ("Y", dec!(2)), ("Z", dec!(3))]);
    let flagged = overexposed_positions(&set, None, dec!(20));

    // 16.67% is below threshold; 33.33% and 50% are flagged in order
    assert_eq!(flagged.len(), 2);
    assert_eq!(flagged[0].identifier, "Y");
    assert_eq!(flagged[0].weight_percent, dec!(33.3));
    assert_eq!(flagged[1].identifier, "Z");
    assert_eq!(flagged[1].weight_percent, dec!(50.0));
}

#[test]
fn test_settings_threshold() {
    let settings = AnalyticsSettings {
        overexposure_threshold_percent: dec!(40),
        ..AnalyticsSettings::default()
    };
    let set = entries(&[("A", dec!(35)), ("B", dec!(65))]);

    let result = analyze_concentration_with_settings(&set, None, &settings);

    assert_eq!(result.overexposed_positions.len(), 1);
    assert_eq!(result.overexposed_positions[0].identifier, "B");
}

// ==================== Generic over entry shape ====================

#[test]
fn test_scores_holdings_within_a_class() {
    let holdings: Vec<Holding> = vec![
        CryptoHolding {
            id: "1".to_string(),
            symbol: "BTC".to_string(),
            quantity: Some(dec!(1)),
            current_price: Some(dec!(900)),
            ..Default::default()
        }
        .into(),
        CryptoHolding {
            id: "2".to_string(),
            symbol: "ETH".to_string(),
            quantity: Some(dec!(1)),
            current_price: Some(dec!(100)),
            ..Default::default()
        }
        .into(),
    ];

    let result = analyze_concentration(&holdings, None, dec!(20));

    // 0.81 + 0.01
    assert_eq!(result.hhi, dec!(0.82));
    assert_eq!(result.diversification_score, 18);
    assert_eq!(result.overexposed_positions[0].identifier, "BTC");
}

#[test]
fn test_scores_classes_within_portfolio() {
    let totals: BTreeMap<AssetClass, ClassTotals> = [
        (AssetClass::Shares, ClassTotals::new(dec!(600000), dec!(500000), 3)),
        (AssetClass::Crypto, ClassTotals::new(dec!(300000), dec!(400000), 2)),
        (AssetClass::RealEstate, ClassTotals::new(dec!(100000), dec!(100000), 1)),
    ]
    .into_iter()
    .collect();
    let snapshot = summarize_classes(&totals);

    let result = analyze_concentration(&snapshot.summaries(), None, dec!(20));

    // 0.36 + 0.09 + 0.01, empty classes add nothing
    assert_eq!(result.hhi, dec!(0.46));
    assert_eq!(result.diversification_score, 54);
    let ids: Vec<&str> = result
        .overexposed_positions
        .iter()
        .map(|p| p.identifier.as_str())
        .collect();
    assert_eq!(ids, vec!["SHARES", "CRYPTO"]);
}
