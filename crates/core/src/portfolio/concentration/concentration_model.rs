//! Concentration models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::Exposure;

/// An ad hoc weighted entry, for sets that are not holdings or class summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedEntry {
    pub identifier: String,
    pub value: Decimal,
}

impl WeightedEntry {
    pub fn new(identifier: impl Into<String>, value: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            value,
        }
    }
}

impl Exposure for WeightedEntry {
    fn label(&self) -> &str {
        &self.identifier
    }

    fn value(&self) -> Decimal {
        self.value
    }

    /// Weighted entries carry no cost basis.
    fn invested(&self) -> Decimal {
        Decimal::ZERO
    }
}

/// A position weighing more than the overexposure threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverexposedPosition {
    pub identifier: String,
    /// Weight in percent, rounded to one decimal place
    pub weight_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationResult {
    /// 0 (single position) to 100 (fully spread)
    pub diversification_score: u8,
    /// Herfindahl-Hirschman index, sum of squared weights
    pub hhi: Decimal,
    /// Flagged positions in input order
    pub overexposed_positions: Vec<OverexposedPosition>,
}

impl ConcentrationResult {
    pub fn empty() -> Self {
        Self {
            diversification_score: 0,
            hhi: Decimal::ZERO,
            overexposed_positions: Vec::new(),
        }
    }

    pub fn has_overexposure(&self) -> bool {
        !self.overexposed_positions.is_empty()
    }
}
