//! CSV export of a ledger snapshot
//!
//! Pure formatting: one header row plus one row per position, every field
//! quoted RFC4180-style with embedded quotes doubled. Writing the text to a
//! file is the caller's concern.

use chrono::{DateTime, SecondsFormat, Utc};
use paidoff_ledger::Position;

/// Deterministic download name for an exported ledger
pub const CSV_FILE_NAME: &str = "positions.csv";

/// Column order of the export
pub const CSV_HEADER: [&str; 10] = [
    "id",
    "owner",
    "riskTier",
    "principal",
    "lockMonths",
    "periodicRate",
    "projectedPayout",
    "createdAt",
    "unlockAt",
    "status",
];

/// Serialize positions as CSV text.
///
/// An empty snapshot yields exactly the header row. Timestamps are ISO-8601
/// instants with millisecond precision.
pub fn to_csv(positions: &[Position]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().map(|s| s.to_string()));

    for p in positions {
        push_row(
            &mut out,
            [
                p.id.to_string(),
                p.owner.clone().unwrap_or_default(),
                p.risk_tier.to_string(),
                p.principal.value().to_string(),
                p.lock_months.to_string(),
                p.periodic_rate.to_string(),
                p.projected_payout.to_string(),
                iso_instant(p.created_at),
                iso_instant(p.unlock_at),
                p.status.to_string(),
            ]
            .into_iter(),
        );
    }

    out
}

fn iso_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use paidoff_core::{Amount, RiskTier};
    use paidoff_ledger::{lock_duration, PositionStatus};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_position(owner: Option<&str>) -> Position {
        let created_at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        Position {
            id: Uuid::nil(),
            owner: owner.map(str::to_string),
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
    fn test_empty_ledger_yields_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(
            csv,
            "\"id\",\"owner\",\"riskTier\",\"principal\",\"lockMonths\",\"periodicRate\",\"projectedPayout\",\"createdAt\",\"unlockAt\",\"status\"\n"
        );
    }

    #[test]
    fn test_one_row_per_position() {
        let positions = vec![sample_position(Some("0xabc")), sample_position(None)];
        let csv = to_csv(&positions);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_row_fields() {
        let csv = to_csv(&[sample_position(Some("0xabc"))]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"00000000-0000-0000-0000-000000000000\",\"0xabc\",\"LOW\",\"500\",\"1\",\"0.05\",\"525\",\"2023-11-14T22:13:20.000Z\",\"2023-12-14T22:13:20.000Z\",\"locked\""
        );
    }

    #[test]
    fn test_absent_owner_is_empty_field() {
        let csv = to_csv(&[sample_position(None)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(",\"\",\"LOW\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut position = sample_position(None);
        position.owner = Some("quo\"ted".to_string());
        let csv = to_csv(&[position]);
        assert!(csv.contains("\"quo\"\"ted\""));

        // Decoding the quoted field gives back the original value
        let row = csv.lines().nth(1).unwrap();
        let owner_field = row.split("\",\"").nth(1).unwrap();
        assert_eq!(owner_field.replace("\"\"", "\""), "quo\"ted");
    }
}
