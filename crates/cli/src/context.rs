//! Application context - wires the data directory to the ledger

use paidoff_export::CSV_FILE_NAME;
use paidoff_ledger::Ledger;
use std::path::{Path, PathBuf};

/// Name of the ledger file inside the data directory
const STORE_FILE_NAME: &str = "positions.json";

/// Owns the ledger and the data directory layout for one CLI invocation
pub struct AppContext {
    pub ledger: Ledger,
    data_path: PathBuf,
}

impl AppContext {
    /// Open (or initialize) the data directory and load the ledger
    pub fn new(data_path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let data_path = data_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_path)?;

        let ledger = Ledger::open(data_path.join(STORE_FILE_NAME));
        Ok(Self { ledger, data_path })
    }

    /// Default target path for a CSV export
    pub fn export_path(&self) -> PathBuf {
        self.data_path.join(CSV_FILE_NAME)
    }
}
