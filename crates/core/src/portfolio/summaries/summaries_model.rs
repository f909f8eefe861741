//! Dashboard summary models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::scoring::HealthStatus;

/// Value and share of one category (sector, bond type, symbol).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWeight {
    pub category: String,
    pub value: Decimal,
    /// Percentage of the summed value (0-100), zero when the sum is zero
    pub percentage: Decimal,
}

/// A bond on the maturity ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityEntry {
    pub bond_id: String,
    pub ticker: String,
    pub maturity_date: NaiveDate,
    pub years_remaining: u32,
    pub months_remaining: u32,
    pub face_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondBookSummary {
    pub total_value: Decimal,
    pub annual_income: Decimal,
    pub average_yield: Decimal,
    /// First bond maturing on or after the reference date
    pub next_maturity: Option<MaturityEntry>,
    /// Bonds with a maturity date, soonest first
    pub maturity_schedule: Vec<MaturityEntry>,
    pub allocation_by_type: Vec<CategoryWeight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateSummary {
    pub property_count: usize,
    pub total_valuation: Decimal,
    pub total_equity: Decimal,
    pub average_appreciation: Decimal,
    pub monthly_rental_income: Decimal,
    /// Annual rent of rented properties over their valuation, in percent
    pub rental_yield_percent: Decimal,
}

/// Diversification grade of a property book. `NotApplicable` when there is
/// nothing to grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiversificationGrade {
    A,
    B,
    C,
    D,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl DiversificationGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => DiversificationGrade::A,
            55..=74 => DiversificationGrade::B,
            35..=54 => DiversificationGrade::C,
            _ => DiversificationGrade::D,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiversificationGrade::A => "A",
            DiversificationGrade::B => "B",
            DiversificationGrade::C => "C",
            DiversificationGrade::D => "D",
            DiversificationGrade::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for DiversificationGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How concentrated a property book is by city, by type and in its largest
/// asset. Concentrations are HHI-style percentages rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateDiversification {
    /// 0-100, higher is better spread
    pub score: u8,
    pub grade: DiversificationGrade,
    pub city_concentration_percent: Decimal,
    pub type_concentration_percent: Decimal,
    pub max_single_asset_percent: Decimal,
    pub average_concentration: Decimal,
    pub by_city: Vec<CategoryWeight>,
    pub by_type: Vec<CategoryWeight>,
}

/// Ownership-weighted view of a set of business stakes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    pub total_valuation: Decimal,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    pub average_ownership: Decimal,
    pub active_count: usize,
    pub health: HealthStatus,
}

/// A share ranked by gain/loss percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub symbol: String,
    pub name: Option<String>,
    pub gain_loss_percent: Decimal,
}
