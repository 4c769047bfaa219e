//! Durable JSON store for positions
//!
//! One file holding a JSON array of positions. Reads degrade: a missing,
//! unreadable, or malformed file loads as an empty ledger with a warning,
//! never an error. Writes report failures to the caller.

use crate::error::LedgerError;
use crate::position::Position;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed store for the position array
pub struct PositionStore {
    path: PathBuf,
}

impl PositionStore {
    /// Create a store for the given file path. Nothing is touched on disk
    /// until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all positions.
    ///
    /// A missing file is a normal empty ledger. Unreadable or malformed data
    /// also loads as empty, logged as a warning.
    pub fn load(&self) -> Vec<Position> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "position store unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(positions) => positions,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "position store malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the store with the given snapshot
    pub fn save(&self, positions: &[Position]) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(positions)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Delete the backing file. A missing file is not an error.
    pub fn remove(&self) -> Result<(), LedgerError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{lock_duration, PositionStatus};
    use chrono::{TimeZone, Utc};
    use paidoff_core::{Amount, RiskTier};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_position() -> Position {
        let created_at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        Position {
            id: Uuid::new_v4(),
            owner: Some("0xabc".to_string()),
            created_at,
            unlock_at: created_at + lock_duration(1),
            lock_months: 1,
            risk_tier: RiskTier::Low,
            principal: Amount::new(dec!(500)).unwrap(),
            periodic_rate: dec!(0.05),
            projected_payout: dec!(525),
            status: PositionStatus::Locked,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PositionStore::new(dir.path().join("positions.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PositionStore::new(dir.path().join("positions.json"));
        let positions = vec![sample_position()];
        store.save(&positions).unwrap();
        assert_eq!(store.load(), positions);
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");
        fs::write(&path, "{ not json [").unwrap();
        let store = PositionStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("positions.json");
        let store = PositionStore::new(&path);
        store.save(&[sample_position()]).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = PositionStore::new(dir.path().join("positions.json"));
        store.save(&[sample_position()]).unwrap();
        store.remove().unwrap();
        store.remove().unwrap();
        assert!(store.load().is_empty());
    }
}
