//! What-if scenario projections.
//!
//! Two modes: a whole-book percentage shock computed locally, and a
//! reference-asset shock ("BTC moves -20%") apportioned across holdings with
//! a naive proportional correlation model.

use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use super::scenario_model::{
    HoldingImpact, ScenarioProjection, ScenarioType, ShockInput, ShockSimulation,
    SimulatedHolding,
};
use crate::constants::{
    CORRELATION_PRECISION, PERCENT, SIMULATION_TOTAL_PRECISION, STABLECOIN_SYMBOLS,
};
use crate::holdings::{CryptoHolding, Exposure};
use crate::settings::AnalyticsSettings;
use crate::utils::decimal_utils::{percent_of, round_half_up};

impl From<&CryptoHolding> for ShockInput {
    fn from(holding: &CryptoHolding) -> Self {
        ShockInput::new(
            holding.symbol.clone(),
            holding.quantity.unwrap_or(Decimal::ZERO),
            holding.value(),
        )
    }
}

/// ROI in percent, `None` when nothing was invested.
fn roi(profit: Decimal, invested: Decimal) -> Option<Decimal> {
    if invested.is_zero() {
        None
    } else {
        Some(profit / invested * PERCENT)
    }
}

fn project(
    current_value: Decimal,
    current_invested: Decimal,
    new_value: Decimal,
    per_holding_impact: Vec<HoldingImpact>,
) -> ScenarioProjection {
    let new_total_profit = new_value - current_invested;
    ScenarioProjection {
        new_total_value: new_value,
        new_total_profit,
        new_roi: roi(new_total_profit, current_invested),
        value_change: new_value - current_value,
        per_holding_impact,
    }
}

/// Applies a scenario to the whole book using the default shock sizes.
pub fn simulate_scenario(
    current_value: Decimal,
    current_invested: Decimal,
    scenario: &ScenarioType,
) -> ScenarioProjection {
    simulate_scenario_with_settings(
        current_value,
        current_invested,
        scenario,
        &AnalyticsSettings::default(),
    )
}

/// Applies a scenario to the whole book with configured shock sizes.
///
/// `new_value = current_value * (1 + shock / 100)`. An unknown scenario
/// leaves the value unchanged.
pub fn simulate_scenario_with_settings(
    current_value: Decimal,
    current_invested: Decimal,
    scenario: &ScenarioType,
    settings: &AnalyticsSettings,
) -> ScenarioProjection {
    let multiplier = scenario.shock_percent(settings) / PERCENT;
    let new_value = current_value * (Decimal::ONE + multiplier);

    debug!(
        "Scenario {}: {} -> {} (invested {})",
        scenario, current_value, new_value, current_invested
    );

    project(current_value, current_invested, new_value, Vec::new())
}

/// Parses a scenario name and simulates it. Unknown names apply no shock.
pub fn simulate_named_scenario(
    current_value: Decimal,
    current_invested: Decimal,
    scenario_name: &str,
) -> ScenarioProjection {
    let scenario = ScenarioType::from(scenario_name);
    if scenario == ScenarioType::Unknown {
        warn!(
            "Unknown scenario '{}', projecting without a shock",
            scenario_name
        );
    }
    simulate_scenario(current_value, current_invested, &scenario)
}

/// Display proxy correlation: `change / shock`, rounded to two decimals and
/// clamped to `[-1, 1]`. Zero when the shock is zero.
pub fn proxy_correlation(change_percent: Decimal, shock_percent: Decimal) -> Decimal {
    if shock_percent.is_zero() {
        return Decimal::ZERO;
    }
    let correlation = round_half_up(change_percent / shock_percent, CORRELATION_PRECISION);
    correlation.max(-Decimal::ONE).min(Decimal::ONE)
}

/// Per-holding impacts for display, hiding moves smaller than the default cutoff.
pub fn summarize_shock_impacts(
    simulation: &ShockSimulation,
    shock_percent: Decimal,
) -> Vec<HoldingImpact> {
    summarize_shock_impacts_with_cutoff(
        simulation,
        shock_percent,
        AnalyticsSettings::default().small_impact_cutoff_percent,
    )
}

/// Per-holding impacts for display.
///
/// Holdings with `|change_percent| < cutoff_percent` are dropped; the rest
/// keep input order and carry the proxy correlation.
pub fn summarize_shock_impacts_with_cutoff(
    simulation: &ShockSimulation,
    shock_percent: Decimal,
    cutoff_percent: Decimal,
) -> Vec<HoldingImpact> {
    simulation
        .holdings
        .iter()
        .filter(|h| h.change_percent.abs() >= cutoff_percent)
        .map(|h| HoldingImpact {
            symbol: h.symbol.clone(),
            change_percent: h.change_percent,
            correlation: proxy_correlation(h.change_percent, shock_percent),
        })
        .collect()
}

/// Implied move of one symbol when `target` moves by `shock_percent`.
fn implied_change(
    symbol: &str,
    target: &str,
    shock_percent: Decimal,
    correlations: &HashMap<String, Decimal>,
    fallback_correlation: Decimal,
) -> Decimal {
    if STABLECOIN_SYMBOLS.contains(&symbol) {
        Decimal::ZERO
    } else if symbol == target {
        shock_percent
    } else {
        let correlation = correlations
            .get(symbol)
            .copied()
            .unwrap_or(fallback_correlation);
        correlation * shock_percent
    }
}

/// Shocks `target` by `shock_percent` and apportions the move across the book.
///
/// Stablecoins hold their value, the target moves by the full shock, and
/// every other symbol moves by `correlation * shock`, where `correlations`
/// maps upper-case symbols to their correlation with the target and
/// `fallback_correlation` covers the rest.
pub fn simulate_reference_shock(
    holdings: &[ShockInput],
    target: &str,
    shock_percent: Decimal,
    correlations: &HashMap<String, Decimal>,
    fallback_correlation: Decimal,
) -> ShockSimulation {
    let target = target.trim().to_uppercase();
    let mut total_current_value = Decimal::ZERO;
    let mut total_simulated_value = Decimal::ZERO;

    let simulated: Vec<SimulatedHolding> = holdings
        .iter()
        .map(|holding| {
            let symbol = holding.symbol.trim().to_uppercase();
            let change_percent = implied_change(
                &symbol,
                &target,
                shock_percent,
                correlations,
                fallback_correlation,
            );
            let change_value = holding.current_value * change_percent / PERCENT;
            let simulated_value = holding.current_value + change_value;

            total_current_value += holding.current_value;
            total_simulated_value += simulated_value;

            SimulatedHolding {
                symbol,
                quantity: holding.quantity,
                current_value: holding.current_value,
                simulated_value,
                change_percent,
                change_value,
            }
        })
        .collect();

    let total_change_percent = round_half_up(
        percent_of(total_simulated_value - total_current_value, total_current_value),
        SIMULATION_TOTAL_PRECISION,
    );

    debug!(
        "Shock {} {}% across {} holdings: {} -> {}",
        target,
        shock_percent,
        simulated.len(),
        total_current_value,
        total_simulated_value
    );

    ShockSimulation {
        scenario: format!("{} moves {}%", target, shock_percent),
        total_current_value: round_half_up(total_current_value, SIMULATION_TOTAL_PRECISION),
        total_simulated_value: round_half_up(total_simulated_value, SIMULATION_TOTAL_PRECISION),
        total_change_percent,
        holdings: simulated,
    }
}

/// Turns a reference-shock result into a projection against the invested amount.
pub fn project_shock(
    current_invested: Decimal,
    simulation: &ShockSimulation,
    shock_percent: Decimal,
    settings: &AnalyticsSettings,
) -> ScenarioProjection {
    project(
        simulation.total_current_value,
        current_invested,
        simulation.total_simulated_value,
        summarize_shock_impacts_with_cutoff(
            simulation,
            shock_percent,
            settings.small_impact_cutoff_percent,
        ),
    )
}
