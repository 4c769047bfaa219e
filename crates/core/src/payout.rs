//! Payout calculator - discrete compounding
//!
//! The projected payout compounds the principal once per period:
//! `total_i = total_{i-1} * (1 + rate)`, starting at the principal. No
//! rounding happens here; callers round to 2 decimal places for display only.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when computing a payout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayoutError {
    #[error("Principal cannot be negative: {0}")]
    NegativePrincipal(Decimal),

    #[error("Rate cannot be negative: {0}")]
    NegativeRate(Decimal),

    #[error("Payout overflowed after {0} periods")]
    Overflow(u32),
}

/// Compound `principal` over `periods` periods at the per-period `rate`.
///
/// `periods = 0` returns the principal unchanged. Accumulation is an
/// iterative multiply, never an exponent approximation.
///
/// # Example
/// ```
/// use paidoff_core::projected_payout;
/// use rust_decimal::Decimal;
///
/// let payout = projected_payout(Decimal::new(500, 0), 1, Decimal::new(5, 2)).unwrap();
/// assert_eq!(payout, Decimal::new(525, 0));
/// ```
pub fn projected_payout(
    principal: Decimal,
    periods: u32,
    rate: Decimal,
) -> Result<Decimal, PayoutError> {
    if principal < Decimal::ZERO {
        return Err(PayoutError::NegativePrincipal(principal));
    }
    if rate < Decimal::ZERO {
        return Err(PayoutError::NegativeRate(rate));
    }

    let growth = Decimal::ONE + rate;
    let mut total = principal;
    for _ in 0..periods {
        total = total
            .checked_mul(growth)
            .ok_or(PayoutError::Overflow(periods))?;
    }
    Ok(total)
}
