use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use sms_txn_extractor::engine::{BackupProcessor, Snapshot};
use sms_txn_extractor::parsers::BankRegistry;
use sms_txn_extractor::types::default_time_zone;
use sms_txn_extractor::{loader, reports};

/// Extract credit card transactions from an exported SMS backup.
#[derive(Debug, Parser)]
#[command(name = "sms-txn-extractor", version)]
struct Cli {
    /// CSV export of the backup (address,body,date,multimedia)
    path: PathBuf,

    /// One of: error, warn, info, debug, trace
    #[arg(long, default_value = "error")]
    log_level: String,

    /// Offset from UTC applied to the dates found in message bodies (default: Asia/Karachi, +300)
    #[arg(long, allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,

    #[command(subcommand)]
    command: Command
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Per-bank message counts
    Summary,
    /// Unique vendors from extracted transactions
    Vendors,
    /// Every extracted transaction in message order
    Transactions,
    /// Month-wise spending totals per currency
    Monthly,
    /// Messages that were counted but could not be extracted
    Failures
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let time_zone = match cli.utc_offset_minutes {
        Some(minutes) => parse_utc_offset(minutes)?,
        None => default_time_zone()
    };

    let timer = Instant::now();
    let backup = loader::load_backup(&cli.path)?;
    let snapshot = BackupProcessor::new(BankRegistry::new(time_zone)?).run(&backup)?;
    let duration = timer.elapsed();

    info!("Processed backup in: {duration:?}");

    write_results_to_stdout(&cli.command, &snapshot)?;

    Ok(())
}

fn parse_utc_offset(minutes: i32) -> Result<FixedOffset> {
    minutes.checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| anyhow!("UTC offset of [{minutes}] minutes is out of range"))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Reports go to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(command: &Command, snapshot: &Snapshot) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    match command {
        Command::Summary => reports::write_summary(&mut output, snapshot)?,
        Command::Vendors => reports::write_vendors(&mut output, snapshot)?,
        Command::Transactions => reports::write_transactions(&mut output, snapshot)?,
        Command::Monthly => reports::write_monthly_totals(&mut output, &reports::monthly_totals(&snapshot.transactions))?,
        Command::Failures => reports::write_failures(&mut output, snapshot)?
    }

    output.flush()?;

    Ok(())
}
