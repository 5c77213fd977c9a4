mod monthly;
mod writers;

pub use monthly::{monthly_totals, MonthlyTotals};
pub use writers::{write_failures, write_monthly_totals, write_summary, write_transactions, write_vendors};
