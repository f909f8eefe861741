//! Class-specific dashboard figures.
//!
//! Callers filter records first (sold, matured and so on); these functions
//! only aggregate what they are given. Real estate is the exception and drops
//! sold properties itself.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::summaries_model::{
    BondBookSummary, BusinessSummary, CategoryWeight, DiversificationGrade, MaturityEntry,
    Performer, RealEstateDiversification, RealEstateSummary,
};
use crate::constants::{PERCENT, WEIGHT_DISPLAY_PRECISION};
use crate::holdings::{
    Bond, BusinessStake, CryptoHolding, Exposure, Property, PropertyStatus, RentType, Share,
};
use crate::portfolio::concentration::{herfindahl_index, WeightedEntry};
use crate::scoring::business_health;
use crate::utils::decimal_utils::{mean, percent_of, round_half_up};
use crate::utils::time_utils::time_remaining;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const UNCATEGORIZED: &str = "Other";
const UNKNOWN_CITY: &str = "Unknown";

const CITY_PENALTY_WEIGHT: Decimal = dec!(0.40);
const TYPE_PENALTY_WEIGHT: Decimal = dec!(0.35);
const VALUE_PENALTY_WEIGHT: Decimal = dec!(0.25);
const SINGLE_PROPERTY_SCORE: u8 = 10;

/// Sums values per category and weights them, largest first. Ties keep the
/// order in which categories were first seen.
fn weigh_categories<I>(entries: I) -> Vec<CategoryWeight>
where
    I: IntoIterator<Item = (String, Decimal)>,
{
    let mut order: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (category, value) in entries {
        match index.get(&category) {
            Some(&i) => order[i].1 += value,
            None => {
                index.insert(category.clone(), order.len());
                order.push((category, value));
            }
        }
    }

    let total: Decimal = order.iter().map(|(_, value)| *value).sum();
    let mut weights: Vec<CategoryWeight> = order
        .into_iter()
        .map(|(category, value)| CategoryWeight {
            category,
            value,
            percentage: percent_of(value, total),
        })
        .collect();
    weights.sort_by(|a, b| b.value.cmp(&a.value));
    weights
}

// ==================== BONDS ====================

pub fn summarize_bonds(bonds: &[Bond], as_of: NaiveDate) -> BondBookSummary {
    let total_value: Decimal = bonds.iter().map(|b| b.value()).sum();
    let annual_income: Decimal = bonds.iter().map(|b| b.annual_income()).sum();
    let yields: Vec<Decimal> = bonds
        .iter()
        .map(|b| b.yield_to_maturity.unwrap_or(Decimal::ZERO))
        .collect();

    let mut maturity_schedule: Vec<MaturityEntry> = bonds
        .iter()
        .filter_map(|bond| {
            let maturity_date = bond.maturity_date?;
            let (years_remaining, months_remaining) = time_remaining(as_of, maturity_date);
            Some(MaturityEntry {
                bond_id: bond.id.clone(),
                ticker: bond.ticker.clone(),
                maturity_date,
                years_remaining,
                months_remaining,
                face_value: bond.face_value.unwrap_or(Decimal::ZERO),
            })
        })
        .collect();
    maturity_schedule.sort_by_key(|entry| entry.maturity_date);

    let next_maturity = maturity_schedule
        .iter()
        .find(|entry| entry.maturity_date >= as_of)
        .cloned();

    let allocation_by_type = weigh_categories(
        bonds
            .iter()
            .map(|b| (b.bond_type.display_name().to_string(), b.value())),
    );

    debug!(
        "Bond book: {} bonds, value {}, income {}",
        bonds.len(),
        total_value,
        annual_income
    );

    BondBookSummary {
        total_value,
        annual_income,
        average_yield: mean(&yields),
        next_maturity,
        maturity_schedule,
        allocation_by_type,
    }
}

// ==================== REAL ESTATE ====================

/// Monthly rent of a rented property, zero otherwise.
fn monthly_rent(property: &Property) -> Decimal {
    if property.status != PropertyStatus::Rented {
        return Decimal::ZERO;
    }
    match &property.rental_info {
        Some(info) => {
            let amount = info.rent_amount.unwrap_or(Decimal::ZERO);
            match info.rent_type {
                RentType::Monthly => amount,
                RentType::Yearly => amount / MONTHS_PER_YEAR,
            }
        }
        None => Decimal::ZERO,
    }
}

fn held_properties(properties: &[Property]) -> Vec<&Property> {
    properties
        .iter()
        .filter(|p| p.status != PropertyStatus::Sold)
        .collect()
}

/// Annual rent over current value in percent. Zero unless the property is
/// rented and has a value.
pub fn rental_yield(property: &Property) -> Decimal {
    percent_of(monthly_rent(property) * MONTHS_PER_YEAR, property.value())
}

pub fn summarize_real_estate(properties: &[Property]) -> RealEstateSummary {
    let held = held_properties(properties);

    let appreciations: Vec<Decimal> = held
        .iter()
        .map(|p| p.appreciation.unwrap_or(Decimal::ZERO))
        .collect();

    let monthly_rental_income: Decimal = held.iter().map(|&p| monthly_rent(p)).sum();
    let rented_valuation: Decimal = held
        .iter()
        .filter(|p| p.status == PropertyStatus::Rented)
        .map(|p| p.value())
        .sum();

    RealEstateSummary {
        property_count: held.len(),
        total_valuation: held.iter().map(|p| p.value()).sum(),
        total_equity: held.iter().map(|p| p.equity.unwrap_or(Decimal::ZERO)).sum(),
        average_appreciation: mean(&appreciations),
        monthly_rental_income,
        rental_yield_percent: percent_of(monthly_rental_income * MONTHS_PER_YEAR, rented_valuation),
    }
}

/// First part of the city field ("Pune, MH" is "Pune"), "Unknown" when blank.
fn city_key(property: &Property) -> String {
    property
        .city
        .as_deref()
        .and_then(|city| city.split(',').next())
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .unwrap_or(UNKNOWN_CITY)
        .to_string()
}

fn concentration_percent(weights: &[CategoryWeight], total: Decimal) -> Decimal {
    let entries: Vec<WeightedEntry> = weights
        .iter()
        .map(|w| WeightedEntry::new(w.category.clone(), w.value))
        .collect();
    round_half_up(
        herfindahl_index(&entries, Some(total)) * PERCENT,
        WEIGHT_DISPLAY_PRECISION,
    )
}

/// Scores how spread a property book is across cities, property types and
/// individual assets. Sold properties are ignored.
///
/// The score is `100 - penalty`, clamped to `0..=100` and rounded, where the
/// penalty weighs city concentration at 40%, type concentration at 35% and
/// the squared share of the largest asset at 25%. A single property scores 10
/// and an empty book is not graded.
pub fn analyze_real_estate_diversification(properties: &[Property]) -> RealEstateDiversification {
    let held = held_properties(properties);
    let by_city = weigh_categories(held.iter().map(|&p| (city_key(p), p.value())));
    let by_type = weigh_categories(
        held.iter()
            .map(|p| (p.property_type.display_name().to_string(), p.value())),
    );

    match held.len() {
        0 => {
            return RealEstateDiversification {
                score: 0,
                grade: DiversificationGrade::NotApplicable,
                city_concentration_percent: Decimal::ZERO,
                type_concentration_percent: Decimal::ZERO,
                max_single_asset_percent: Decimal::ZERO,
                average_concentration: Decimal::ZERO,
                by_city,
                by_type,
            };
        }
        1 => {
            return RealEstateDiversification {
                score: SINGLE_PROPERTY_SCORE,
                grade: DiversificationGrade::D,
                city_concentration_percent: PERCENT,
                type_concentration_percent: PERCENT,
                max_single_asset_percent: PERCENT,
                average_concentration: PERCENT,
                by_city,
                by_type,
            };
        }
        _ => {}
    }

    let total: Decimal = held.iter().map(|p| p.value()).sum();
    let city_concentration_percent = concentration_percent(&by_city, total);
    let type_concentration_percent = concentration_percent(&by_type, total);
    let max_single = held
        .iter()
        .map(|p| percent_of(p.value(), total))
        .max()
        .unwrap_or(Decimal::ZERO);
    let max_share = max_single / PERCENT;

    let penalty = city_concentration_percent * CITY_PENALTY_WEIGHT
        + type_concentration_percent * TYPE_PENALTY_WEIGHT
        + max_share * max_share * PERCENT * VALUE_PENALTY_WEIGHT;
    let raw = (PERCENT - penalty).max(Decimal::ZERO).min(PERCENT);
    let score = round_half_up(raw, 0).to_u8().unwrap_or(0);

    let max_single_asset_percent = round_half_up(max_single, WEIGHT_DISPLAY_PRECISION);
    let average_concentration = round_half_up(
        (city_concentration_percent + type_concentration_percent + max_single_asset_percent)
            / dec!(3),
        WEIGHT_DISPLAY_PRECISION,
    );

    debug!(
        "Real estate diversification: {} properties, penalty {}, score {}",
        held.len(),
        penalty,
        score
    );

    RealEstateDiversification {
        score,
        grade: DiversificationGrade::from_score(score),
        city_concentration_percent,
        type_concentration_percent,
        max_single_asset_percent,
        average_concentration,
        by_city,
        by_type,
    }
}

// ==================== BUSINESS ====================

/// Profit over revenue in percent, zero without revenue.
pub fn profit_margin(stake: &BusinessStake) -> Decimal {
    percent_of(
        stake.annual_profit.unwrap_or(Decimal::ZERO),
        stake.annual_revenue.unwrap_or(Decimal::ZERO),
    )
}

pub fn summarize_businesses(stakes: &[BusinessStake]) -> BusinessSummary {
    let total_revenue: Decimal = stakes.iter().map(|s| s.owned_revenue()).sum();
    let total_profit: Decimal = stakes.iter().map(|s| s.owned_profit()).sum();
    let ownership: Vec<Decimal> = stakes
        .iter()
        .map(|s| s.ownership_percent.unwrap_or(Decimal::ZERO))
        .collect();

    BusinessSummary {
        total_valuation: stakes.iter().map(|s| s.value()).sum(),
        total_revenue,
        total_profit,
        average_ownership: mean(&ownership),
        active_count: stakes.iter().filter(|s| s.status.is_operating()).count(),
        health: business_health(total_revenue, total_profit),
    }
}

// ==================== SHARES ====================

/// Share value per sector, largest first. Shares without a sector fall under
/// "Other".
pub fn sector_exposure(shares: &[Share]) -> Vec<CategoryWeight> {
    weigh_categories(shares.iter().map(|share| {
        let sector = share
            .sector
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNCATEGORIZED);
        (sector.to_string(), share.value())
    }))
}

fn performer(share: &Share) -> Performer {
    Performer {
        symbol: share.symbol.clone(),
        name: share.company_name.clone(),
        gain_loss_percent: share.valuation().gain_loss_percent,
    }
}

/// Best and worst share by gain/loss percent. On ties the earlier share wins.
pub fn best_and_worst_performers(shares: &[Share]) -> Option<(Performer, Performer)> {
    let first = shares.first()?;
    let mut best = performer(first);
    let mut worst = best.clone();

    for share in &shares[1..] {
        let candidate = performer(share);
        if candidate.gain_loss_percent > best.gain_loss_percent {
            best = candidate;
        } else if candidate.gain_loss_percent < worst.gain_loss_percent {
            worst = candidate;
        }
    }
    Some((best, worst))
}

// ==================== CRYPTO ====================

/// Value per symbol across wallets, largest first.
pub fn crypto_allocation(holdings: &[CryptoHolding]) -> Vec<CategoryWeight> {
    weigh_categories(
        holdings
            .iter()
            .map(|h| (h.symbol.trim().to_uppercase(), h.value())),
    )
}
