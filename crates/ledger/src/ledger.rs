//! The position ledger
//!
//! Sole owner of position lifetime: creation, reconciliation, claiming, and
//! reset all go through here, and only here touches the backing store. All
//! operations run to completion on one logical thread; wrap the ledger in a
//! mutex before sharing it across real threads.

use crate::error::LedgerError;
use crate::position::{lock_duration, Position, PositionStatus};
use crate::store::PositionStore;
use chrono::{DateTime, Utc};
use paidoff_core::{projected_payout, Amount, RatePolicy, RiskTier};
use rust_decimal::Decimal;
use std::path::PathBuf;
use uuid::Uuid;

/// Inputs for opening a position
#[derive(Debug, Clone)]
pub struct CreateParams {
    /// Amount to lock, must be positive
    pub principal: Decimal,
    /// Whole months, must be >= 1
    pub lock_months: u32,
    pub risk_tier: RiskTier,
    /// Optional wallet address binding the position
    pub owner: Option<String>,
}

/// Durable ledger of positions, newest first.
///
/// Loading never fails: a missing or corrupt store starts empty. Writes are
/// best-effort; a failed persist is logged and the in-memory state stays
/// authoritative for the rest of the process.
pub struct Ledger {
    positions: Vec<Position>,
    store: PositionStore,
    policy: RatePolicy,
}

impl Ledger {
    /// Open the ledger backed by the given file, with the default rate policy
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path, RatePolicy::new())
    }

    /// Open the ledger with a custom rate policy.
    ///
    /// The policy only affects positions created after this point; existing
    /// records keep their snapshotted rates.
    pub fn with_policy(path: impl Into<PathBuf>, policy: RatePolicy) -> Self {
        let store = PositionStore::new(path);
        let positions = store.load();
        Self {
            positions,
            store,
            policy,
        }
    }

    /// Number of positions currently tracked
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Look up a position by id
    pub fn get(&self, id: Uuid) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Open a new position at the current wall-clock time
    pub fn create(&mut self, params: CreateParams) -> Result<Position, LedgerError> {
        self.create_at(params, Utc::now())
    }

    /// Open a new position with an injected clock.
    ///
    /// Snapshots the tier's rate, computes the projected payout once, and
    /// inserts the record at the head of the ledger.
    pub fn create_at(
        &mut self,
        params: CreateParams,
        now: DateTime<Utc>,
    ) -> Result<Position, LedgerError> {
        let principal = Amount::new(params.principal)
            .map_err(|_| LedgerError::InvalidPrincipal(params.principal))?;
        if !principal.is_positive() {
            return Err(LedgerError::InvalidPrincipal(params.principal));
        }
        if params.lock_months < 1 {
            return Err(LedgerError::InvalidLockMonths(params.lock_months));
        }

        let periodic_rate = self.policy.rate_for(params.risk_tier);
        let payout = projected_payout(principal.value(), params.lock_months, periodic_rate)?;

        let position = Position {
            id: Uuid::new_v4(),
            owner: params.owner,
            created_at: now,
            unlock_at: now + lock_duration(params.lock_months),
            lock_months: params.lock_months,
            risk_tier: params.risk_tier,
            principal,
            periodic_rate,
            projected_payout: payout,
            status: PositionStatus::Locked,
        };

        self.positions.insert(0, position.clone());
        self.persist();
        tracing::info!(id = %position.id, tier = %position.risk_tier, "position opened");
        Ok(position)
    }

    /// Snapshot of the ledger, newest first, optionally filtered by owner.
    ///
    /// Reconciles matured locks first, so callers always see fresh statuses.
    /// The returned positions are copies; mutating them has no effect on the
    /// ledger.
    pub fn list(&mut self, owner: Option<&str>) -> Vec<Position> {
        self.list_at(owner, Utc::now())
    }

    /// `list` with an injected clock
    pub fn list_at(&mut self, owner: Option<&str>, now: DateTime<Utc>) -> Vec<Position> {
        self.reconcile_at(now);
        self.positions
            .iter()
            .filter(|p| match owner {
                Some(owner) => p
                    .owner
                    .as_deref()
                    .is_some_and(|o| o.eq_ignore_ascii_case(owner)),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Promote matured locks at the current wall-clock time
    pub fn reconcile(&mut self) -> usize {
        self.reconcile_at(Utc::now())
    }

    /// Promote every LOCKED position whose unlock time has passed.
    ///
    /// Returns how many were promoted. Persists only when something changed,
    /// so calling this on every read or timer tick causes no storage churn.
    /// Idempotent: a second call with the same `now` promotes nothing.
    pub fn reconcile_at(&mut self, now: DateTime<Utc>) -> usize {
        let mut promoted = 0;
        for position in &mut self.positions {
            if position.status == PositionStatus::Locked && position.is_matured(now) {
                position.status = PositionStatus::Unlocked;
                promoted += 1;
            }
        }
        if promoted > 0 {
            self.persist();
            tracing::info!(promoted, "matured positions unlocked");
        }
        promoted
    }

    /// Claim the payout of an unlocked position.
    ///
    /// Returns `false` without touching state when the id is unknown, the
    /// requester does not match a recorded owner, or the position is not
    /// UNLOCKED. The callers only need a yes/no answer, so all failure modes
    /// collapse into `false`; details go to the debug log.
    pub fn claim(&mut self, id: Uuid, requester: Option<&str>) -> bool {
        let Some(position) = self.positions.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(%id, "claim refused: unknown position");
            return false;
        };
        if !position.owner_matches(requester) {
            tracing::debug!(%id, "claim refused: owner mismatch");
            return false;
        }
        if position.status != PositionStatus::Unlocked {
            tracing::debug!(%id, status = %position.status, "claim refused: not claimable");
            return false;
        }

        position.status = PositionStatus::Claimed;
        self.persist();
        tracing::info!(%id, "position claimed");
        true
    }

    /// Delete every position unconditionally, including the backing file
    pub fn remove_all(&mut self) {
        self.positions.clear();
        if let Err(err) = self.store.remove() {
            tracing::warn!(%err, "failed to remove position store");
        }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.positions) {
            tracing::warn!(%err, "failed to persist ledger, in-memory state kept");
        }
    }
}
