//! Cross-asset net worth aggregation.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use super::net_worth_model::{AssetClassSummary, ClassTotals, NetWorthSnapshot};
use crate::holdings::{AssetClass, Exposure, Holding, PortfolioHoldings};
use crate::utils::decimal_utils::percent_of;

/// Sums value, cost basis and count per asset class.
///
/// Every class is present in the result, with zero totals when it has no
/// holdings.
pub fn class_totals(holdings: &[Holding]) -> BTreeMap<AssetClass, ClassTotals> {
    let mut totals: BTreeMap<AssetClass, ClassTotals> = AssetClass::ALL
        .iter()
        .map(|class| (*class, ClassTotals::default()))
        .collect();

    for holding in holdings {
        totals
            .entry(holding.asset_class())
            .or_default()
            .add(holding.value(), holding.invested());
    }

    totals
}

/// Calculates a net worth snapshot from holdings of any class.
///
/// Holdings are not filtered by status here; pass `PortfolioHoldings::active()`
/// output (or an equivalent pre-filtered list) to exclude sold positions.
pub fn calculate_net_worth(holdings: &[Holding]) -> NetWorthSnapshot {
    debug!("Calculating net worth over {} holdings", holdings.len());
    summarize_classes(&class_totals(holdings))
}

/// Convenience wrapper over grouped holdings.
pub fn calculate_portfolio_net_worth(portfolio: &PortfolioHoldings) -> NetWorthSnapshot {
    calculate_net_worth(&portfolio.to_holdings())
}

/// Builds a snapshot from per-class totals.
///
/// Classes missing from `totals` are reported with zeros. Percentages are
/// zero when total net worth is zero, and gain percentages are zero when
/// nothing was invested.
pub fn summarize_classes(totals: &BTreeMap<AssetClass, ClassTotals>) -> NetWorthSnapshot {
    let total_net_worth: Decimal = totals.values().map(|t| t.value).sum();
    let total_invested: Decimal = totals.values().map(|t| t.invested).sum();

    let asset_breakdown: BTreeMap<AssetClass, AssetClassSummary> = AssetClass::ALL
        .iter()
        .map(|class| {
            let summary = match totals.get(class) {
                Some(t) => {
                    let gain_loss = t.value - t.invested;
                    AssetClassSummary {
                        asset_class: *class,
                        value: t.value,
                        percentage_of_net_worth: percent_of(t.value, total_net_worth),
                        count: t.count,
                        invested: t.invested,
                        gain_loss,
                        gain_loss_percent: percent_of(gain_loss, t.invested),
                    }
                }
                None => AssetClassSummary::empty(*class),
            };
            (*class, summary)
        })
        .collect();

    let total_gain_loss: Decimal = asset_breakdown.values().map(|s| s.gain_loss).sum();

    debug!(
        "Net worth {} (invested {}, gain/loss {})",
        total_net_worth, total_invested, total_gain_loss
    );

    NetWorthSnapshot {
        total_net_worth,
        total_invested,
        total_gain_loss,
        total_gain_loss_percent: percent_of(total_gain_loss, total_invested),
        asset_breakdown,
    }
}
