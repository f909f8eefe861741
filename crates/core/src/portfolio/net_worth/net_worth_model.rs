//! Net worth domain models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::{AssetClass, Exposure};

/// Raw per-class totals fed into the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClassTotals {
    /// Sum of current values
    pub value: Decimal,
    /// Sum of cost bases
    pub invested: Decimal,
    /// Number of holdings contributing
    pub count: usize,
}

impl ClassTotals {
    pub fn new(value: Decimal, invested: Decimal, count: usize) -> Self {
        Self {
            value,
            invested,
            count,
        }
    }

    pub fn add(&mut self, value: Decimal, invested: Decimal) {
        self.value += value;
        self.invested += invested;
        self.count += 1;
    }
}

/// Summary of one asset class within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassSummary {
    pub asset_class: AssetClass,
    /// Current value of the class
    pub value: Decimal,
    /// Share of total net worth (0-100), zero for an empty portfolio
    pub percentage_of_net_worth: Decimal,
    pub count: usize,
    pub invested: Decimal,
    pub gain_loss: Decimal,
    /// Zero when nothing was invested in the class
    pub gain_loss_percent: Decimal,
}

impl AssetClassSummary {
    /// An empty summary for a class with no holdings.
    pub fn empty(asset_class: AssetClass) -> Self {
        Self {
            asset_class,
            value: Decimal::ZERO,
            percentage_of_net_worth: Decimal::ZERO,
            count: 0,
            invested: Decimal::ZERO,
            gain_loss: Decimal::ZERO,
            gain_loss_percent: Decimal::ZERO,
        }
    }
}

impl Exposure for AssetClassSummary {
    fn label(&self) -> &str {
        self.asset_class.as_str()
    }

    fn value(&self) -> Decimal {
        self.value
    }

    fn invested(&self) -> Decimal {
        self.invested
    }
}

/// Portfolio-wide totals with a per-class breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    /// Sum of every class value
    pub total_net_worth: Decimal,
    /// Sum of every class cost basis
    pub total_invested: Decimal,
    pub total_gain_loss: Decimal,
    /// Zero when nothing was invested
    pub total_gain_loss_percent: Decimal,
    /// Always holds all five classes, iterated in canonical order
    pub asset_breakdown: BTreeMap<AssetClass, AssetClassSummary>,
}

impl NetWorthSnapshot {
    /// A snapshot for a portfolio with no holdings.
    pub fn empty() -> Self {
        Self {
            total_net_worth: Decimal::ZERO,
            total_invested: Decimal::ZERO,
            total_gain_loss: Decimal::ZERO,
            total_gain_loss_percent: Decimal::ZERO,
            asset_breakdown: AssetClass::ALL
                .iter()
                .map(|class| (*class, AssetClassSummary::empty(*class)))
                .collect(),
        }
    }

    pub fn summary(&self, asset_class: AssetClass) -> Option<&AssetClassSummary> {
        self.asset_breakdown.get(&asset_class)
    }

    /// Class summaries in canonical order.
    pub fn summaries(&self) -> Vec<&AssetClassSummary> {
        self.asset_breakdown.values().collect()
    }
}
