//! PaidOff CLI - Main entry point

use clap::{Parser, Subcommand};
use paidoff_cli::{commands, AppContext};
use paidoff_core::RiskTier;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "paidoff")]
#[command(about = "PaidOff - time-locked yield position ledger", long_about = None)]
struct Cli {
    /// Data directory path
    #[arg(short, long, default_value = "./data")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a new time-locked position
    Open {
        /// Amount to lock, in USDT
        amount: Decimal,
        /// Lock duration in whole months
        months: u32,
        /// Risk tier (LOW, MEDIUM, HIGH)
        risk: RiskTier,
        /// Owner address to bind the position to
        #[arg(long)]
        owner: Option<String>,
    },

    /// List positions, promoting matured locks first
    List {
        /// Only show positions owned by this address
        #[arg(long)]
        owner: Option<String>,
    },

    /// Claim the payout of an unlocked position
    Claim {
        /// Position id
        id: Uuid,
        /// Requesting owner address
        #[arg(long)]
        owner: Option<String>,
    },

    /// Export the ledger as CSV
    Export {
        /// Output file path (defaults to positions.csv in the data directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Encode a shareable plan link, or preview one with --from
    Plan {
        /// Risk tier to encode
        #[arg(long)]
        risk: Option<RiskTier>,
        /// Amount to encode
        #[arg(long)]
        amount: Option<Decimal>,
        /// Months to encode
        #[arg(long)]
        months: Option<u32>,
        /// Decode and preview an existing plan query string
        #[arg(long, conflicts_with_all = ["risk", "amount", "months"])]
        from: Option<String>,
    },

    /// Promote matured positions on a fixed interval
    Watch {
        /// Polling interval in seconds
        #[arg(long, default_value = "5")]
        interval: u64,
    },

    /// Delete every position unconditionally
    Reset,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut ctx = AppContext::new(&cli.data)?;

    match cli.command {
        Commands::Open {
            amount,
            months,
            risk,
            owner,
        } => commands::open(&mut ctx, amount, months, risk, owner)?,

        Commands::List { owner } => commands::list(&mut ctx, owner.as_deref())?,

        Commands::Claim { id, owner } => commands::claim(&mut ctx, id, owner.as_deref())?,

        Commands::Export { output } => commands::export(&mut ctx, output)?,

        Commands::Plan {
            risk,
            amount,
            months,
            from,
        } => match from {
            Some(query) => commands::plan_preview(&query)?,
            None => {
                let (Some(risk), Some(amount), Some(months)) = (risk, amount, months) else {
                    anyhow::bail!("plan needs either --from or all of --risk, --amount, --months");
                };
                commands::plan_encode(risk, amount, months)?;
            }
        },

        Commands::Watch { interval } => {
            commands::watch(&mut ctx, Duration::from_secs(interval))?
        }

        Commands::Reset => commands::reset(&mut ctx)?,
    }

    Ok(())
}
