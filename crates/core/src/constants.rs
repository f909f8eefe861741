use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Multiplier turning a ratio into a percentage
pub const PERCENT: Decimal = dec!(100);

/// Positions weighing more than this share of their set are overexposed
pub const DEFAULT_OVEREXPOSURE_THRESHOLD: Decimal = dec!(20);

/// Decimal places kept for a flagged position's weight
pub const WEIGHT_DISPLAY_PRECISION: u32 = 1;

/// Decimal places kept for the proxy correlation
pub const CORRELATION_PRECISION: u32 = 2;

/// Decimal places kept for simulated totals
pub const SIMULATION_TOTAL_PRECISION: u32 = 2;

/// Shock applied by the market crash scenario (percent)
pub const MARKET_CRASH_PERCENT: Decimal = dec!(-20);

/// Shock applied by the asset drop scenario (percent)
pub const ASSET_DROP_PERCENT: Decimal = dec!(-10);

/// Growth applied by the custom growth scenario (percent)
pub const CUSTOM_GROWTH_PERCENT: Decimal = dec!(15);

/// Per-holding impacts smaller than this (absolute percent) are not reported
pub const SMALL_IMPACT_CUTOFF: Decimal = dec!(0.1);

/// Correlation assumed when no historical correlation is known
pub const FALLBACK_CORRELATION: Decimal = dec!(0.5);

/// Symbols that hold their peg during a simulated shock
pub const STABLECOIN_SYMBOLS: [&str; 3] = ["USDT", "USDC", "DAI"];
