//! Herfindahl-Hirschman diversification scoring and overexposure checks.
//!
//! Works on anything implementing [`Exposure`], so the same code scores
//! holdings within one class and classes within the whole portfolio.

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::concentration_model::{ConcentrationResult, OverexposedPosition};
use crate::constants::{PERCENT, WEIGHT_DISPLAY_PRECISION};
use crate::holdings::Exposure;
use crate::settings::AnalyticsSettings;
use crate::utils::decimal_utils::round_half_up;

fn resolve_total<T: Exposure>(entries: &[T], total_value: Option<Decimal>) -> Decimal {
    total_value.unwrap_or_else(|| entries.iter().map(|e| e.value()).sum())
}

/// Sum of squared weights. Zero for an empty set or a non-positive total.
pub fn herfindahl_index<T: Exposure>(entries: &[T], total_value: Option<Decimal>) -> Decimal {
    let total = resolve_total(entries, total_value);
    if entries.is_empty() || total <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    entries
        .iter()
        .map(|e| {
            let weight = e.value() / total;
            weight * weight
        })
        .sum()
}

/// Diversification score in `0..=100`: `round((1 - hhi) * 100)`.
///
/// One position holding everything scores 0; empty sets and sets with no
/// value also score 0.
pub fn diversification_score<T: Exposure>(entries: &[T], total_value: Option<Decimal>) -> u8 {
    let total = resolve_total(entries, total_value);
    if entries.is_empty() || total <= Decimal::ZERO {
        return 0;
    }
    score_from_hhi(herfindahl_index(entries, Some(total)))
}

fn score_from_hhi(hhi: Decimal) -> u8 {
    let raw = (Decimal::ONE - hhi) * PERCENT;
    let clamped = raw.max(Decimal::ZERO).min(PERCENT);
    round_half_up(clamped, 0).to_u8().unwrap_or(0)
}

/// Positions whose weight is strictly above `threshold_percent`, in input order.
pub fn overexposed_positions<T: Exposure>(
    entries: &[T],
    total_value: Option<Decimal>,
    threshold_percent: Decimal,
) -> Vec<OverexposedPosition> {
    let total = resolve_total(entries, total_value);
    if total <= Decimal::ZERO {
        return Vec::new();
    }

    entries
        .iter()
        .filter_map(|e| {
            let weight_percent = e.value() / total * PERCENT;
            if weight_percent > threshold_percent {
                Some(OverexposedPosition {
                    identifier: e.label().to_string(),
                    weight_percent: round_half_up(weight_percent, WEIGHT_DISPLAY_PRECISION),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Scores diversification and flags overexposed positions in one pass.
///
/// `total_value` defaults to the sum of entry values.
pub fn analyze_concentration<T: Exposure>(
    entries: &[T],
    total_value: Option<Decimal>,
    threshold_percent: Decimal,
) -> ConcentrationResult {
    let total = resolve_total(entries, total_value);
    if entries.is_empty() || total <= Decimal::ZERO {
        debug!(
            "Concentration skipped: {} entries, total {}",
            entries.len(),
            total
        );
        return ConcentrationResult::empty();
    }

    let hhi = herfindahl_index(entries, Some(total));
    let result = ConcentrationResult {
        diversification_score: score_from_hhi(hhi),
        hhi,
        overexposed_positions: overexposed_positions(entries, Some(total), threshold_percent),
    };

    debug!(
        "Concentration over {} entries: hhi {}, score {}, {} overexposed",
        entries.len(),
        result.hhi,
        result.diversification_score,
        result.overexposed_positions.len()
    );

    result
}

/// Same as [`analyze_concentration`] with the configured threshold.
pub fn analyze_concentration_with_settings<T: Exposure>(
    entries: &[T],
    total_value: Option<Decimal>,
    settings: &AnalyticsSettings,
) -> ConcentrationResult {
    analyze_concentration(
        entries,
        total_value,
        settings.overexposure_threshold_percent,
    )
}
