//! Risk tiers and the APR policy
//!
//! The policy maps a tier to its per-period (monthly) rate. The rate is
//! snapshotted onto each position at creation, so changing the policy never
//! retroactively alters existing positions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Default per-period rates
pub const DEFAULT_LOW_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2); // 0.05
pub const DEFAULT_MEDIUM_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2); // 0.12
pub const DEFAULT_HIGH_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2); // 0.25

/// Errors that can occur when configuring a rate policy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Rates must satisfy 0 < LOW < MEDIUM < HIGH < 1, got {low}/{medium}/{high}")]
    InvalidRateOrder {
        low: Decimal,
        medium: Decimal,
        high: Decimal,
    },
}

/// Risk category of a position, fixed at creation
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    /// Conservative strategy, lowest volatility
    Low,
    /// Balanced strategy
    Medium,
    /// Aggressive strategy, highest rate
    High,
}

/// Maps a risk tier to its per-period rate.
///
/// Total over the enum: every tier has a rate, there is no error path at
/// lookup time. The exact constants are configuration, but the ordering
/// HIGH > MEDIUM > LOW is a hard requirement checked at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatePolicy {
    low: Decimal,
    medium: Decimal,
    high: Decimal,
}

impl RatePolicy {
    /// Create a policy with the default product rates
    pub fn new() -> Self {
        Self {
            low: DEFAULT_LOW_RATE,
            medium: DEFAULT_MEDIUM_RATE,
            high: DEFAULT_HIGH_RATE,
        }
    }

    /// Create a policy with custom rates.
    ///
    /// Rejects any set that is not strictly increasing inside (0, 1).
    pub fn with_rates(low: Decimal, medium: Decimal, high: Decimal) -> Result<Self, PolicyError> {
        let ordered = Decimal::ZERO < low && low < medium && medium < high && high < Decimal::ONE;
        if !ordered {
            return Err(PolicyError::InvalidRateOrder { low, medium, high });
        }
        Ok(Self { low, medium, high })
    }

    /// Per-period rate for a tier
    pub fn rate_for(&self, tier: RiskTier) -> Decimal {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
        }
    }
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-period rate for a tier under the default policy
pub fn rate_for(tier: RiskTier) -> Decimal {
    RatePolicy::new().rate_for(tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rates_are_strictly_increasing() {
        let policy = RatePolicy::new();
        assert!(policy.rate_for(RiskTier::Low) < policy.rate_for(RiskTier::Medium));
        assert!(policy.rate_for(RiskTier::Medium) < policy.rate_for(RiskTier::High));
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(rate_for(RiskTier::Low), dec!(0.05));
        assert_eq!(rate_for(RiskTier::Medium), dec!(0.12));
        assert_eq!(rate_for(RiskTier::High), dec!(0.25));
    }

    #[test]
    fn test_custom_rates_validated() {
        assert!(RatePolicy::with_rates(dec!(0.03), dec!(0.10), dec!(0.28)).is_ok());
        // MEDIUM below LOW
        assert!(RatePolicy::with_rates(dec!(0.10), dec!(0.05), dec!(0.28)).is_err());
        // HIGH at or above 1 is not a sane periodic rate
        assert!(RatePolicy::with_rates(dec!(0.05), dec!(0.12), dec!(1)).is_err());
        // Zero LOW
        assert!(RatePolicy::with_rates(dec!(0), dec!(0.12), dec!(0.25)).is_err());
    }

    #[test]
    fn test_tier_string_forms() {
        assert_eq!(RiskTier::High.to_string(), "HIGH");
        assert_eq!("LOW".parse::<RiskTier>().unwrap(), RiskTier::Low);
        assert_eq!("medium".parse::<RiskTier>().unwrap(), RiskTier::Medium);
        assert!("EXTREME".parse::<RiskTier>().is_err());
    }

    #[test]
    fn test_tier_serde_screaming_case() {
        let json = serde_json::to_string(&RiskTier::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
        let tier: RiskTier = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(tier, RiskTier::High);
    }
}
