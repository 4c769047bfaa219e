//! PaidOff core - leaf domain types and pure functions
//!
//! Everything in this crate is side-effect free. The ledger crate builds the
//! stateful position lifecycle on top of these primitives.
//!
//! # Key Types
//! - `Amount`: Non-negative decimal wrapper for deposit amounts
//! - `RiskTier`: LOW / MEDIUM / HIGH risk category
//! - `RatePolicy`: maps a risk tier to its per-period rate
//! - `projected_payout`: discrete compounding calculator

pub mod amount;
pub mod fmt;
pub mod payout;
pub mod plan;
pub mod tier;

pub use amount::{Amount, AmountError};
pub use fmt::{format_time_left, format_usdt};
pub use payout::{projected_payout, PayoutError};
pub use plan::{decode_plan, encode_plan, PlanParams};
pub use tier::{rate_for, PolicyError, RatePolicy, RiskTier};
