//! Position - one time-locked deposit record
//!
//! Serialized field names stay camelCase and timestamps stay ms-since-epoch
//! to remain readable by tooling written against the original stored layout.

use chrono::{DateTime, Duration, Utc};
use paidoff_core::{Amount, RiskTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// One compounding period, fixed at 30 days
pub const PERIOD_DAYS: i64 = 30;

/// Total lock duration for a whole number of months
pub fn lock_duration(months: u32) -> Duration {
    Duration::days(PERIOD_DAYS * i64::from(months))
}

/// Lifecycle status of a position.
///
/// Only ever advances forward: LOCKED -> UNLOCKED -> CLAIMED. The transitions
/// are owned by the `Ledger` (reconcile and claim); nothing else writes the
/// status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    /// Funds committed, unlock time not yet reached
    Locked,
    /// Matured, payout claimable
    Unlocked,
    /// Payout collected, terminal
    Claimed,
}

/// One deposit/lock record tracked by the ledger.
///
/// Every field except `status` is immutable after creation. The rate and
/// projected payout are snapshots taken at creation time; later policy
/// changes never alter an existing position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: Uuid,

    /// Wallet/user address this position is bound to; absent = local-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// `created_at + lock_months * 30 days`, fixed at creation
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub unlock_at: DateTime<Utc>,

    pub lock_months: u32,

    pub risk_tier: RiskTier,

    pub principal: Amount,

    /// Per-period rate snapshotted from the policy at creation
    pub periodic_rate: Decimal,

    /// Principal compounded over `lock_months` periods, computed once
    pub projected_payout: Decimal,

    pub status: PositionStatus,
}

impl Position {
    /// Whether the lock has expired at `now`
    pub fn is_matured(&self, now: DateTime<Utc>) -> bool {
        now >= self.unlock_at
    }

    /// Owner check for claims.
    ///
    /// A position with no recorded owner is claimable by any requester; an
    /// owned position requires a case-insensitive match when a requester is
    /// given. This relaxation for ownerless positions is deliberate (local
    /// anonymous use), not an oversight.
    pub fn owner_matches(&self, requester: Option<&str>) -> bool {
        match (self.owner.as_deref(), requester) {
            (Some(owner), Some(requester)) => owner.eq_ignore_ascii_case(requester),
            _ => true,
        }
    }
}
