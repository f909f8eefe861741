//! Per-holding valuation.
//!
//! Every asset class exposes the same narrow view (`label`, `value`,
//! `invested`) so aggregation and concentration scoring never special-case
//! class-specific field names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_model::{Bond, BusinessStake, CryptoHolding, Holding, Property, Share};
use crate::constants::PERCENT;
use crate::utils::decimal_utils::percent_of;

/// Normalized valuation of a single holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub current_value: Decimal,
    pub invested_value: Decimal,
    pub gain_loss: Decimal,
    /// Zero when nothing was invested
    pub gain_loss_percent: Decimal,
}

impl HoldingValuation {
    pub fn new(current_value: Decimal, invested_value: Decimal) -> Self {
        let gain_loss = current_value - invested_value;
        Self {
            current_value,
            invested_value,
            gain_loss,
            gain_loss_percent: percent_of(gain_loss, invested_value),
        }
    }
}

/// Shared view of anything carrying a value and a cost basis.
pub trait Exposure {
    /// Identifier reported back by scorers (symbol, name or class key).
    fn label(&self) -> &str;

    /// Current market value.
    fn value(&self) -> Decimal;

    /// Amount invested (cost basis).
    fn invested(&self) -> Decimal;

    fn valuation(&self) -> HoldingValuation {
        HoldingValuation::new(self.value(), self.invested())
    }
}

fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

impl Exposure for Share {
    fn label(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> Decimal {
        match (self.quantity, self.current_price) {
            (Some(quantity), Some(price)) => quantity * price,
            _ => or_zero(self.total_value),
        }
    }

    fn invested(&self) -> Decimal {
        match self.total_invested {
            Some(total) => total,
            None => or_zero(self.quantity) * or_zero(self.avg_buy_price),
        }
    }
}

impl Exposure for CryptoHolding {
    fn label(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> Decimal {
        or_zero(self.quantity) * or_zero(self.current_price)
    }

    fn invested(&self) -> Decimal {
        or_zero(self.quantity) * or_zero(self.purchase_price_avg)
    }
}

impl Exposure for Bond {
    fn label(&self) -> &str {
        &self.ticker
    }

    /// The stored market value, never derived from face value.
    fn value(&self) -> Decimal {
        or_zero(self.current_price)
    }

    fn invested(&self) -> Decimal {
        or_zero(self.purchase_price)
    }
}

impl Bond {
    /// Yearly coupon income: `face_value * coupon_rate / 100`.
    pub fn annual_income(&self) -> Decimal {
        or_zero(self.face_value) * or_zero(self.coupon_rate) / PERCENT
    }
}

impl Exposure for Property {
    fn label(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Decimal {
        or_zero(self.current_value)
    }

    fn invested(&self) -> Decimal {
        or_zero(self.purchase_value)
    }
}

impl Exposure for BusinessStake {
    fn label(&self) -> &str {
        &self.name
    }

    /// Owned share of the business valuation. A stake with no recorded
    /// ownership is worth zero, whatever the business is valued at.
    fn value(&self) -> Decimal {
        or_zero(self.valuation) * self.ownership_fraction()
    }

    fn invested(&self) -> Decimal {
        or_zero(self.invested_amount)
    }
}

impl BusinessStake {
    /// Ownership as a fraction in `[0, 1]` for well-formed records.
    pub fn ownership_fraction(&self) -> Decimal {
        or_zero(self.ownership_percent) / PERCENT
    }

    pub fn owned_revenue(&self) -> Decimal {
        or_zero(self.annual_revenue) * self.ownership_fraction()
    }

    pub fn owned_profit(&self) -> Decimal {
        or_zero(self.annual_profit) * self.ownership_fraction()
    }
}

impl Exposure for Holding {
    fn label(&self) -> &str {
        match self {
            Holding::Share(s) => s.label(),
            Holding::Crypto(c) => c.label(),
            Holding::Property(p) => p.label(),
            Holding::Bond(b) => b.label(),
            Holding::Business(b) => b.label(),
        }
    }

    fn value(&self) -> Decimal {
        match self {
            Holding::Share(s) => s.value(),
            Holding::Crypto(c) => c.value(),
            Holding::Property(p) => p.value(),
            Holding::Bond(b) => b.value(),
            Holding::Business(b) => b.value(),
        }
    }

    fn invested(&self) -> Decimal {
        match self {
            Holding::Share(s) => s.invested(),
            Holding::Crypto(c) => c.invested(),
            Holding::Property(p) => p.invested(),
            Holding::Bond(b) => b.invested(),
            Holding::Business(b) => b.invested(),
        }
    }
}

impl<T: Exposure + ?Sized> Exposure for &T {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn value(&self) -> Decimal {
        (**self).value()
    }

    fn invested(&self) -> Decimal {
        (**self).invested()
    }
}
