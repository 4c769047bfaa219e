//! CLI commands

use crate::context::AppContext;
use chrono::Utc;
use paidoff_core::{
    decode_plan, encode_plan, format_time_left, format_usdt, projected_payout, rate_for, PlanParams,
    RiskTier,
};
use paidoff_ledger::{CreateParams, Position, PositionStatus};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Open a new time-locked position
pub fn open(
    ctx: &mut AppContext,
    amount: Decimal,
    months: u32,
    risk: RiskTier,
    owner: Option<String>,
) -> Result<(), anyhow::Error> {
    let position = ctx.ledger.create(CreateParams {
        principal: amount,
        lock_months: months,
        risk_tier: risk,
        owner,
    })?;

    println!("✅ Opened position {}", position.id);
    println!(
        "   {} USDT locked for {} month(s) at {}%/period ({})",
        format_usdt(position.principal.value()),
        position.lock_months,
        position.periodic_rate * Decimal::ONE_HUNDRED,
        position.risk_tier,
    );
    println!(
        "   Projected payout {} USDT, unlocks {}",
        format_usdt(position.projected_payout),
        position.unlock_at.format("%Y-%m-%d %H:%M UTC"),
    );
    Ok(())
}

/// List positions, reconciling matured locks first
pub fn list(ctx: &mut AppContext, owner: Option<&str>) -> Result<(), anyhow::Error> {
    let positions = ctx.ledger.list(owner);
    if positions.is_empty() {
        println!("No positions yet. Open one with `paidoff open`.");
        return Ok(());
    }

    println!(
        "{:<38} {:<7} {:>14} {:>7} {:>7} {:>14} {:<9} {:<10}",
        "ID", "TIER", "PRINCIPAL", "MONTHS", "RATE", "PAYOUT", "STATUS", "UNLOCK"
    );
    let now = Utc::now();
    for p in &positions {
        let rate = format!("{}%", p.periodic_rate * Decimal::ONE_HUNDRED);
        println!(
            "{:<38} {:<7} {:>14} {:>7} {:>7} {:>14} {:<9} {:<10}",
            p.id.to_string(),
            p.risk_tier.to_string(),
            format_usdt(p.principal.value()),
            p.lock_months,
            rate,
            format_usdt(p.projected_payout),
            p.status.to_string(),
            unlock_column(p, now),
        );
    }
    println!("   {} position(s)", positions.len());
    Ok(())
}

fn unlock_column(position: &Position, now: chrono::DateTime<Utc>) -> String {
    match position.status {
        PositionStatus::Locked => format_time_left(position.unlock_at - now),
        PositionStatus::Unlocked => "ready".to_string(),
        PositionStatus::Claimed => "-".to_string(),
    }
}

/// Claim the payout of an unlocked position
pub fn claim(ctx: &mut AppContext, id: Uuid, owner: Option<&str>) -> Result<(), anyhow::Error> {
    // Reconcile first so a freshly matured position is claimable immediately
    ctx.ledger.reconcile();

    if ctx.ledger.claim(id, owner) {
        println!("✅ Claimed position {}", id);
        Ok(())
    } else {
        anyhow::bail!("claim refused: unknown id, owner mismatch, or position not unlocked")
    }
}

/// Export the ledger as CSV
pub fn export(ctx: &mut AppContext, output: Option<PathBuf>) -> Result<(), anyhow::Error> {
    let positions = ctx.ledger.list(None);
    let csv = paidoff_export::to_csv(&positions);
    let path = output.unwrap_or_else(|| ctx.export_path());
    std::fs::write(&path, csv)?;

    println!(
        "✅ Exported {} position(s) to {}",
        positions.len(),
        path.display()
    );
    Ok(())
}

/// Encode a shareable plan link
pub fn plan_encode(
    risk: RiskTier,
    amount: Decimal,
    months: u32,
) -> Result<(), anyhow::Error> {
    println!("{}", encode_plan(risk, amount, months));
    Ok(())
}

/// Preview a decoded plan link, with a payout projection when complete
pub fn plan_preview(query: &str) -> Result<(), anyhow::Error> {
    let plan = decode_plan(query);
    if plan == PlanParams::default() {
        anyhow::bail!("nothing recognizable in plan query: {query}");
    }

    if let Some(risk) = plan.risk {
        println!("Risk:   {} ({}%/period)", risk, rate_for(risk) * Decimal::ONE_HUNDRED);
    }
    if let Some(amount) = plan.amount {
        println!("Amount: {} USDT", format_usdt(amount));
    }
    if let Some(months) = plan.months {
        println!("Months: {months}");
    }

    if let (Some(risk), Some(amount), Some(months)) = (plan.risk, plan.amount, plan.months) {
        let payout = projected_payout(amount, months, rate_for(risk))?;
        println!("Projected payout: {} USDT", format_usdt(payout));
    }
    Ok(())
}

/// Delete every position unconditionally
pub fn reset(ctx: &mut AppContext) -> Result<(), anyhow::Error> {
    let removed = ctx.ledger.len();
    ctx.ledger.remove_all();
    println!("🗑️  Ledger cleared ({} position(s) removed)", removed);
    Ok(())
}

/// Promote matured positions on a fixed interval until interrupted.
///
/// The interval is a freshness knob only; a missed tick is picked up by the
/// next one, and `list` reconciles on its own anyway.
pub fn watch(ctx: &mut AppContext, interval: Duration) -> Result<(), anyhow::Error> {
    println!(
        "👀 Reconciling every {}s, Ctrl-C to stop",
        interval.as_secs()
    );
    loop {
        let promoted = ctx.ledger.reconcile();
        if promoted > 0 {
            println!("🔓 Unlocked {} position(s)", promoted);
        }
        std::thread::sleep(interval);
    }
}
