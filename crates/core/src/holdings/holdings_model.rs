//! Holding records for the five asset classes.
//!
//! Records arrive from the table store already typed. Any numeric field the
//! store may leave empty is optional; valuation treats a missing number as a
//! zero contribution instead of failing the whole dashboard.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset classes in canonical reporting order.
///
/// The derived `Ord` follows declaration order, so any `BTreeMap` keyed by
/// class iterates Shares, Crypto, Real Estate, Bonds, Business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Shares,
    Crypto,
    RealEstate,
    Bonds,
    Business,
}

impl AssetClass {
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Shares,
        AssetClass::Crypto,
        AssetClass::RealEstate,
        AssetClass::Bonds,
        AssetClass::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Shares => "SHARES",
            AssetClass::Crypto => "CRYPTO",
            AssetClass::RealEstate => "REAL_ESTATE",
            AssetClass::Bonds => "BONDS",
            AssetClass::Business => "BUSINESS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssetClass::Shares => "Shares",
            AssetClass::Crypto => "Crypto",
            AssetClass::RealEstate => "Real Estate",
            AssetClass::Bonds => "Bonds",
            AssetClass::Business => "Business",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== SHARES ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShareStatus {
    #[default]
    Active,
    Sold,
}

/// An equity position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub avg_buy_price: Option<Decimal>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    /// Precomputed market value, used when quantity or price is missing
    #[serde(default)]
    pub total_value: Option<Decimal>,
    /// Precomputed cost basis, preferred over quantity * avg_buy_price
    #[serde(default)]
    pub total_invested: Option<Decimal>,
    #[serde(default)]
    pub daily_change_percent: Option<Decimal>,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ShareStatus,
}

// ==================== CRYPTO ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CryptoStatus {
    #[default]
    Active,
    Sold,
}

/// A crypto position held in one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHolding {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub wallet_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub purchase_price_avg: Option<Decimal>,
    /// 24h price change in percent
    #[serde(default)]
    pub price_change_24h: Option<Decimal>,
    #[serde(default)]
    pub status: CryptoStatus,
}

// ==================== BONDS ====================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BondType {
    Government,
    Treasury,
    Municipal,
    Corporate,
    Agency,
    Sovereign,
    Convertible,
    ZeroCoupon,
    FloatingRate,
    InflationLinked,
    HighYield,
    Green,
    Perpetual,
    #[default]
    #[serde(other)]
    Other,
}

impl BondType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BondType::Government => "Government",
            BondType::Treasury => "Treasury",
            BondType::Municipal => "Municipal",
            BondType::Corporate => "Corporate",
            BondType::Agency => "Agency",
            BondType::Sovereign => "Sovereign",
            BondType::Convertible => "Convertible",
            BondType::ZeroCoupon => "Zero-Coupon",
            BondType::FloatingRate => "Floating Rate",
            BondType::InflationLinked => "Inflation-Linked",
            BondType::HighYield => "High-Yield",
            BondType::Green => "Green",
            BondType::Perpetual => "Perpetual",
            BondType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BondStatus {
    #[default]
    Active,
    Matured,
    Called,
    Sold,
}

/// A fixed-income position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bond {
    pub id: String,
    pub ticker: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub bond_type: BondType,
    #[serde(default)]
    pub face_value: Option<Decimal>,
    /// Annual coupon in percent of face value
    #[serde(default)]
    pub coupon_rate: Option<Decimal>,
    /// Stored market value of the position
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub yield_to_maturity: Option<Decimal>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: BondStatus,
    #[serde(default)]
    pub currency: Option<String>,
}

// ==================== REAL ESTATE ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Owned,
    Rented,
    Sold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    Land,
}

impl PropertyType {
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
            PropertyType::Land => "Land",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RentType {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RentalInfo {
    #[serde(default)]
    pub rent_type: RentType,
    #[serde(default)]
    pub rent_amount: Option<Decimal>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// A real-estate property. Equity and appreciation are stored, not derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub purchase_value: Option<Decimal>,
    #[serde(default)]
    pub current_value: Option<Decimal>,
    /// Appreciation since purchase in percent
    #[serde(default)]
    pub appreciation: Option<Decimal>,
    #[serde(default)]
    pub equity: Option<Decimal>,
    #[serde(default)]
    pub outstanding_mortgage: Option<Decimal>,
    /// Loan-to-value in percent
    #[serde(default)]
    pub loan_to_value: Option<Decimal>,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default)]
    pub rental_info: Option<RentalInfo>,
}

// ==================== BUSINESS ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BusinessStatus {
    Growing,
    Stable,
    Declining,
    #[default]
    Active,
    Sold,
    Acquired,
    Inactive,
}

impl BusinessStatus {
    /// Whether the stake still counts toward the live portfolio.
    pub fn is_operating(&self) -> bool {
        matches!(
            self,
            BusinessStatus::Active | BusinessStatus::Growing | BusinessStatus::Stable
        )
    }
}

/// A stake in a private business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessStake {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    /// Share of the business owned, in percent
    #[serde(default)]
    pub ownership_percent: Option<Decimal>,
    /// Valuation of the whole business
    #[serde(default)]
    pub valuation: Option<Decimal>,
    #[serde(default)]
    pub invested_amount: Option<Decimal>,
    #[serde(default)]
    pub annual_revenue: Option<Decimal>,
    #[serde(default)]
    pub annual_profit: Option<Decimal>,
    #[serde(default)]
    pub status: BusinessStatus,
}

// ==================== HOLDING ====================

/// One holding of any asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assetClass")]
pub enum Holding {
    #[serde(rename = "SHARES")]
    Share(Share),
    #[serde(rename = "CRYPTO")]
    Crypto(CryptoHolding),
    #[serde(rename = "REAL_ESTATE")]
    Property(Property),
    #[serde(rename = "BONDS")]
    Bond(Bond),
    #[serde(rename = "BUSINESS")]
    Business(BusinessStake),
}

impl Holding {
    pub fn asset_class(&self) -> AssetClass {
        match self {
            Holding::Share(_) => AssetClass::Shares,
            Holding::Crypto(_) => AssetClass::Crypto,
            Holding::Property(_) => AssetClass::RealEstate,
            Holding::Bond(_) => AssetClass::Bonds,
            Holding::Business(_) => AssetClass::Business,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Holding::Share(s) => &s.id,
            Holding::Crypto(c) => &c.id,
            Holding::Property(p) => &p.id,
            Holding::Bond(b) => &b.id,
            Holding::Business(b) => &b.id,
        }
    }

    /// Whether the holding is still held (not sold, matured or liquidated).
    pub fn is_active(&self) -> bool {
        match self {
            Holding::Share(s) => s.status == ShareStatus::Active,
            Holding::Crypto(c) => c.status == CryptoStatus::Active,
            Holding::Property(p) => p.status != PropertyStatus::Sold,
            Holding::Bond(b) => b.status == BondStatus::Active,
            Holding::Business(b) => b.status.is_operating(),
        }
    }
}

impl From<Share> for Holding {
    fn from(share: Share) -> Self {
        Holding::Share(share)
    }
}

impl From<CryptoHolding> for Holding {
    fn from(holding: CryptoHolding) -> Self {
        Holding::Crypto(holding)
    }
}

impl From<Property> for Holding {
    fn from(property: Property) -> Self {
        Holding::Property(property)
    }
}

impl From<Bond> for Holding {
    fn from(bond: Bond) -> Self {
        Holding::Bond(bond)
    }
}

impl From<BusinessStake> for Holding {
    fn from(stake: BusinessStake) -> Self {
        Holding::Business(stake)
    }
}

/// Holdings grouped by asset class, as read from the table store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHoldings {
    #[serde(default)]
    pub shares: Vec<Share>,
    #[serde(default)]
    pub crypto: Vec<CryptoHolding>,
    #[serde(default)]
    pub real_estate: Vec<Property>,
    #[serde(default)]
    pub bonds: Vec<Bond>,
    #[serde(default)]
    pub business: Vec<BusinessStake>,
}

impl PortfolioHoldings {
    /// Returns a copy keeping only holdings that are still held.
    pub fn active(&self) -> Self {
        Self {
            shares: self
                .shares
                .iter()
                .filter(|s| s.status == ShareStatus::Active)
                .cloned()
                .collect(),
            crypto: self
                .crypto
                .iter()
                .filter(|c| c.status == CryptoStatus::Active)
                .cloned()
                .collect(),
            real_estate: self
                .real_estate
                .iter()
                .filter(|p| p.status != PropertyStatus::Sold)
                .cloned()
                .collect(),
            bonds: self
                .bonds
                .iter()
                .filter(|b| b.status == BondStatus::Active)
                .cloned()
                .collect(),
            business: self
                .business
                .iter()
                .filter(|b| b.status.is_operating())
                .cloned()
                .collect(),
        }
    }

    /// Flattens the groups into holdings in canonical class order.
    pub fn to_holdings(&self) -> Vec<Holding> {
        let mut holdings = Vec::with_capacity(self.len());
        holdings.extend(self.shares.iter().cloned().map(Holding::Share));
        holdings.extend(self.crypto.iter().cloned().map(Holding::Crypto));
        holdings.extend(self.real_estate.iter().cloned().map(Holding::Property));
        holdings.extend(self.bonds.iter().cloned().map(Holding::Bond));
        holdings.extend(self.business.iter().cloned().map(Holding::Business));
        holdings
    }

    pub fn len(&self) -> usize {
        self.shares.len()
            + self.crypto.len()
            + self.real_estate.len()
            + self.bonds.len()
            + self.business.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
