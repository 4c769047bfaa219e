//! Ledger errors

use paidoff_core::PayoutError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Principal must be positive, got {0}")]
    InvalidPrincipal(Decimal),

    #[error("Lock duration must be at least 1 month, got {0}")]
    InvalidLockMonths(u32),

    #[error(transparent)]
    Payout(#[from] PayoutError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
