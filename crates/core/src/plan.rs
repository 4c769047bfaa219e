//! Shareable plan links
//!
//! A plan is a pre-deposit preview (tier, amount, months) that can be encoded
//! into a query string and pasted elsewhere. Decoding is tolerant: missing or
//! garbage parameters are simply absent from the result.

use crate::tier::RiskTier;
use rust_decimal::{Decimal, RoundingStrategy};

/// A decoded plan. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanParams {
    pub risk: Option<RiskTier>,
    pub amount: Option<Decimal>,
    pub months: Option<u32>,
}

/// Encode a plan as a query string, e.g. `risk=HIGH&amount=500&months=3`.
///
/// The amount is clamped to >= 0 and rounded to a whole number; months is
/// clamped to >= 1.
pub fn encode_plan(risk: RiskTier, amount: Decimal, months: u32) -> String {
    let amount = amount
        .max(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let months = months.max(1);
    format!("risk={risk}&amount={amount}&months={months}")
}

/// Decode a plan query string, ignoring anything unrecognizable.
///
/// A leading `?` is accepted so full URL query parts can be pasted as-is.
pub fn decode_plan(query: &str) -> PlanParams {
    let mut plan = PlanParams::default();
    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "risk" => plan.risk = value.parse().ok(),
            "amount" => plan.amount = value.parse().ok(),
            "months" => plan.months = value.parse().ok(),
            _ => {}
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_encode_plan() {
        assert_eq!(
            encode_plan(RiskTier::High, dec!(500), 3),
            "risk=HIGH&amount=500&months=3"
        );
    }

    #[test]
    fn test_encode_clamps_amount_and_months() {
        assert_eq!(
            encode_plan(RiskTier::Low, dec!(-10), 0),
            "risk=LOW&amount=0&months=1"
        );
        assert_eq!(
            encode_plan(RiskTier::Medium, dec!(249.6), 6),
            "risk=MEDIUM&amount=250&months=6"
        );
    }

    #[test]
    fn test_roundtrip() {
        let plan = decode_plan(&encode_plan(RiskTier::Medium, dec!(1200), 6));
        assert_eq!(plan.risk, Some(RiskTier::Medium));
        assert_eq!(plan.amount, Some(dec!(1200)));
        assert_eq!(plan.months, Some(6));
    }

    #[test]
    fn test_decode_tolerates_garbage() {
        let plan = decode_plan("?risk=EXTREME&amount=abc&months=2&theme=dark&dangling");
        assert_eq!(plan.risk, None);
        assert_eq!(plan.amount, None);
        assert_eq!(plan.months, Some(2));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_plan(""), PlanParams::default());
    }
}
