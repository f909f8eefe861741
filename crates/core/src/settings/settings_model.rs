use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ASSET_DROP_PERCENT, CUSTOM_GROWTH_PERCENT, DEFAULT_OVEREXPOSURE_THRESHOLD,
    FALLBACK_CORRELATION, MARKET_CRASH_PERCENT, SMALL_IMPACT_CUTOFF,
};
use crate::errors::{Error, Result};

/// Environment variable overriding the overexposure threshold (percent).
pub const ENV_OVEREXPOSURE_THRESHOLD: &str = "WL_OVEREXPOSURE_THRESHOLD";
/// Environment variable overriding the per-holding impact cutoff (percent).
pub const ENV_SMALL_IMPACT_CUTOFF: &str = "WL_SMALL_IMPACT_CUTOFF";
/// Environment variable overriding the fallback correlation.
pub const ENV_FALLBACK_CORRELATION: &str = "WL_FALLBACK_CORRELATION";

/// Tunable parameters for the analytics calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSettings {
    pub overexposure_threshold_percent: Decimal,
    pub market_crash_percent: Decimal,
    pub asset_drop_percent: Decimal,
    pub custom_growth_percent: Decimal,
    /// Per-holding impacts below this absolute percent are not reported
    pub small_impact_cutoff_percent: Decimal,
    /// Correlation used for symbols without a known correlation
    pub fallback_correlation: Decimal,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            overexposure_threshold_percent: DEFAULT_OVEREXPOSURE_THRESHOLD,
            market_crash_percent: MARKET_CRASH_PERCENT,
            asset_drop_percent: ASSET_DROP_PERCENT,
            custom_growth_percent: CUSTOM_GROWTH_PERCENT,
            small_impact_cutoff_percent: SMALL_IMPACT_CUTOFF,
            fallback_correlation: FALLBACK_CORRELATION,
        }
    }
}

impl AnalyticsSettings {
    /// Parses settings stored as JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: AnalyticsSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads overrides from `WL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`. Unparsable or invalid values are
    /// ignored with a warning and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut settings = defaults.clone();

        if let Some(value) = read_decimal(&lookup, ENV_OVEREXPOSURE_THRESHOLD) {
            settings.overexposure_threshold_percent = value;
        }
        if let Some(value) = read_decimal(&lookup, ENV_SMALL_IMPACT_CUTOFF) {
            settings.small_impact_cutoff_percent = value;
        }
        if let Some(value) = read_decimal(&lookup, ENV_FALLBACK_CORRELATION) {
            settings.fallback_correlation = value;
        }

        if let Err(e) = settings.validate() {
            warn!("Ignoring analytics overrides: {}", e);
            return defaults;
        }
        settings
    }

    /// Rejects negative thresholds and correlations outside `[-1, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.overexposure_threshold_percent < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "overexposure threshold must not be negative, got {}",
                self.overexposure_threshold_percent
            )));
        }
        if self.small_impact_cutoff_percent < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "small impact cutoff must not be negative, got {}",
                self.small_impact_cutoff_percent
            )));
        }
        if self.fallback_correlation < -Decimal::ONE || self.fallback_correlation > Decimal::ONE {
            return Err(Error::InvalidConfigValue(format!(
                "fallback correlation must be within [-1, 1], got {}",
                self.fallback_correlation
            )));
        }
        Ok(())
    }
}

fn read_decimal<F>(lookup: &F, key: &str) -> Option<Decimal>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match Decimal::from_str(raw.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Invalid {} value '{}': {}. Using default.", key, raw, e);
            None
        }
    }
}
