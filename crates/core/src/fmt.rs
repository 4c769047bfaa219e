//! Display formatting for amounts and countdowns
//!
//! Rounding to 2 decimal places happens here and only here. Stored values
//! keep full precision.

use chrono::Duration;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a USDT value with 2 decimal places and thousands grouping.
pub fn format_usdt(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let raw = rounded.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}

/// Format the time remaining until unlock as "3d 4h", "5h", or "ready".
pub fn format_time_left(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return "ready".to_string();
    }
    let days = remaining.num_days();
    let hours = (remaining - Duration::days(days)).num_hours();
    if days > 0 {
        format!("{days}d {hours}h")
    } else {
        format!("{hours}h")
    }
}
