//! PaidOff CLI - position lifecycle front end
//!
//! Thin presentation layer over the ledger: it only invokes core operations
//! and formats derived values, mirroring what the product UI does.

pub mod commands;
pub mod context;

pub use context::AppContext;
