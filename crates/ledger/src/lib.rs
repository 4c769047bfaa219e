//! PaidOff Ledger - durable position store and lifecycle state machine
//!
//! This is the HEART of PaidOff. Every position mutation goes through the
//! `Ledger`: creation, reconciliation (LOCKED -> UNLOCKED), claiming
//! (UNLOCKED -> CLAIMED), and the destructive reset. No other component
//! touches a `Position` or the backing store directly.
//!
//! # Key Types
//! - `Position`: one time-locked deposit record
//! - `PositionStatus`: LOCKED / UNLOCKED / CLAIMED
//! - `PositionStore`: durable JSON store, degrades to empty on corruption
//! - `Ledger`: owns the in-memory snapshot and the store

pub mod error;
pub mod ledger;
pub mod position;
pub mod store;

pub use error::LedgerError;
pub use ledger::{CreateParams, Ledger};
pub use position::{lock_duration, Position, PositionStatus, PERIOD_DAYS};
pub use store::PositionStore;
