use std::io::{Result, Write};

use crate::engine::Snapshot;
use crate::reports::monthly::MonthlyTotals;

pub fn write_summary(output: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    writeln!(output, "Parsed messages summary:")?;

    for (key, count) in &snapshot.per_bank_counts {
        writeln!(output, "\t{:<8}{count}", format!("{key}:"))?;
    }

    writeln!(output, "\t{:<8}{}", "DUPES:", snapshot.duplicates)?;
    writeln!(output, "\t{:<8}{}", "TXNS:", snapshot.transactions.len())?;
    writeln!(output, "\t{:<8}{}", "FAILED:", snapshot.failures.len())?;

    Ok(())
}

pub fn write_vendors(output: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    writeln!(output, "Found {} unique vendors:", snapshot.vendors.len())?;

    for (index, vendor) in snapshot.vendors.iter().enumerate() {
        writeln!(output, "Vendor {}: [{vendor}]", index + 1)?;
    }

    Ok(())
}

pub fn write_transactions(output: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    writeln!(output, "Found {} credit card transactions:", snapshot.transactions.len())?;

    for (index, transaction) in snapshot.transactions.iter().enumerate() {
        writeln!(output, "{}: {transaction}", index + 1)?;
    }

    Ok(())
}

pub fn write_monthly_totals(output: &mut impl Write, totals: &MonthlyTotals) -> Result<()> {
    writeln!(output, "month,currency,total")?;

    for (month, per_currency) in totals {
        for (currency, total) in per_currency {
            writeln!(output, "{month},{currency},{total:.2}")?;
        }
    }

    Ok(())
}

pub fn write_failures(output: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    writeln!(output, "Found {} messages that could not be processed:", snapshot.failures.len())?;

    for failure in &snapshot.failures {
        writeln!(
            output,
            "sender={} error={} body=[{}]",
            failure.address.as_deref().unwrap_or("<missing>"),
            failure.error,
            failure.body.as_deref().unwrap_or("<missing>")
        )?;
    }

    Ok(())
}
