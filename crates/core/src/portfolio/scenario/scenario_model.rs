//! What-if scenario models.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::settings::AnalyticsSettings;

/// A hypothetical market move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioType {
    /// Whole market drops (-20% by default)
    MarketCrash,
    /// A single asset drops (-10% by default)
    AssetDrop,
    /// Optimistic growth (+15% by default)
    CustomGrowth,
    /// A direct shock in percent
    Shock(Decimal),
    /// Unrecognized scenario: no shock is applied
    Unknown,
}

impl ScenarioType {
    /// Shock in percent for this scenario.
    pub fn shock_percent(&self, settings: &AnalyticsSettings) -> Decimal {
        match self {
            ScenarioType::MarketCrash => settings.market_crash_percent,
            ScenarioType::AssetDrop => settings.asset_drop_percent,
            ScenarioType::CustomGrowth => settings.custom_growth_percent,
            ScenarioType::Shock(percent) => *percent,
            ScenarioType::Unknown => Decimal::ZERO,
        }
    }
}

impl From<&str> for ScenarioType {
    /// Unrecognized names map to [`ScenarioType::Unknown`].
    fn from(s: &str) -> Self {
        match s.trim() {
            "market_crash" => ScenarioType::MarketCrash,
            "asset_drop" => ScenarioType::AssetDrop,
            "custom_growth" => ScenarioType::CustomGrowth,
            _ => ScenarioType::Unknown,
        }
    }
}

impl FromStr for ScenarioType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ScenarioType::from(s))
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioType::MarketCrash => f.write_str("market_crash"),
            ScenarioType::AssetDrop => f.write_str("asset_drop"),
            ScenarioType::CustomGrowth => f.write_str("custom_growth"),
            ScenarioType::Shock(percent) => write!(f, "shock({}%)", percent),
            ScenarioType::Unknown => f.write_str("unknown"),
        }
    }
}

/// Display view of how one holding reacts to a reference shock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingImpact {
    pub symbol: String,
    pub change_percent: Decimal,
    /// `change_percent / shock_percent`, two decimals, clamped to `[-1, 1]`.
    /// A display proxy, not a fitted correlation.
    pub correlation: Decimal,
}

/// Projected portfolio after a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioProjection {
    pub new_total_value: Decimal,
    pub new_total_profit: Decimal,
    /// `None` when nothing was invested; the caller picks the display fallback
    pub new_roi: Option<Decimal>,
    pub value_change: Decimal,
    pub per_holding_impact: Vec<HoldingImpact>,
}

/// A holding entering a reference-shock simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockInput {
    pub symbol: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub current_value: Decimal,
}

impl ShockInput {
    pub fn new(symbol: impl Into<String>, quantity: Decimal, current_value: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            current_value,
        }
    }
}

/// One holding after a reference shock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedHolding {
    pub symbol: String,
    pub quantity: Decimal,
    #[serde(alias = "current_value")]
    pub current_value: Decimal,
    #[serde(alias = "simulated_value")]
    pub simulated_value: Decimal,
    #[serde(alias = "change_percent")]
    pub change_percent: Decimal,
    #[serde(alias = "change_value")]
    pub change_value: Decimal,
}

/// Result of shocking a reference asset across a book, either computed
/// locally or supplied by the market-simulation service. Serializes as
/// camelCase and also reads the service's snake_case payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockSimulation {
    pub scenario: String,
    #[serde(alias = "total_current_value")]
    pub total_current_value: Decimal,
    #[serde(alias = "total_simulated_value")]
    pub total_simulated_value: Decimal,
    /// Zero when the book had no value
    #[serde(alias = "total_change_percent")]
    pub total_change_percent: Decimal,
    pub holdings: Vec<SimulatedHolding>,
}
