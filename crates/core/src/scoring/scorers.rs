//! Threshold scorers. All comparisons are strict, so a value sitting exactly
//! on a boundary falls into the lower band.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::scoring_model::{HealthStatus, Momentum, PerformanceGrade, Trend, VolatilityLevel};
use crate::utils::decimal_utils::ratio_or_zero;

const HIGH_VOLATILITY_SYMBOLS: [&str; 5] = ["TSLA", "IDEA", "ADANI", "ZOMATO", "CRYPTO"];
const LOW_VOLATILITY_SYMBOLS: [&str; 4] = ["HDFCBANK", "RELIANCE", "ITC", "BONDS"];

const HEALTHY_MARGIN: Decimal = dec!(0.25);
const STABLE_MARGIN: Decimal = dec!(0.15);

/// Momentum from the daily move and the overall gain/loss, both in percent.
pub fn momentum_score(daily_change_percent: Decimal, gain_loss_percent: Decimal) -> Momentum {
    if daily_change_percent > dec!(2) {
        return Momentum::Strong;
    }
    if daily_change_percent < dec!(-2) {
        return Momentum::Weak;
    }
    let fading_winner = gain_loss_percent > dec!(10) && daily_change_percent < dec!(-1);
    let recovering_loser = gain_loss_percent < dec!(-10) && daily_change_percent > dec!(1);
    if fading_winner || recovering_loser {
        Momentum::Reversing
    } else {
        Momentum::Neutral
    }
}

pub fn trend_direction(daily_change_percent: Decimal) -> Trend {
    if daily_change_percent > dec!(0.5) {
        Trend::Uptrend
    } else if daily_change_percent < dec!(-0.5) {
        Trend::Downtrend
    } else {
        Trend::Sideways
    }
}

/// Grade from ROI in percent. Stability only lifts the two top bands.
pub fn performance_grade(roi_percent: Decimal, is_stable: bool) -> PerformanceGrade {
    if roi_percent > dec!(20) {
        if is_stable {
            PerformanceGrade::APlus
        } else {
            PerformanceGrade::A
        }
    } else if roi_percent > dec!(10) {
        if is_stable {
            PerformanceGrade::A
        } else {
            PerformanceGrade::BPlus
        }
    } else if roi_percent > dec!(5) {
        PerformanceGrade::B
    } else if roi_percent > Decimal::ZERO {
        PerformanceGrade::C
    } else if roi_percent > dec!(-5) {
        PerformanceGrade::D
    } else {
        PerformanceGrade::F
    }
}

/// Volatility from a fixed symbol list. Matching is a case-insensitive
/// substring test and the high list wins over the low list.
pub fn volatility_level(symbol: &str) -> VolatilityLevel {
    let symbol = symbol.to_uppercase();
    if HIGH_VOLATILITY_SYMBOLS.iter().any(|s| symbol.contains(s)) {
        VolatilityLevel::High
    } else if LOW_VOLATILITY_SYMBOLS.iter().any(|s| symbol.contains(s)) {
        VolatilityLevel::Low
    } else {
        VolatilityLevel::Medium
    }
}

/// Health from the profit margin `profit / revenue`. Zero revenue counts as a
/// zero margin.
pub fn business_health(total_revenue: Decimal, total_profit: Decimal) -> HealthStatus {
    let margin = ratio_or_zero(total_profit, total_revenue);
    if margin > HEALTHY_MARGIN {
        HealthStatus::Healthy
    } else if margin > STABLE_MARGIN {
        HealthStatus::Stable
    } else {
        HealthStatus::AtRisk
    }
}
