use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::Transaction;
use crate::types::Currency;

pub type MonthlyTotals = BTreeMap<String, BTreeMap<Currency, Decimal>>;

/// Sums spending per calendar month (`YYYY-MM`, in each transaction's own offset) and currency.
///
/// Every month that has at least one transaction lists all currencies, zero included.
pub fn monthly_totals(transactions: &[Transaction]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::new();

    for transaction in transactions {
        let month = transaction.occurred_at().format("%Y-%m").to_string();
        let per_currency = totals.entry(month).or_insert_with(|| {
            Currency::ALL.into_iter().map(|currency| (currency, Decimal::ZERO)).collect()
        });

        let currency_amount = transaction.currency_amount();
        *per_currency.entry(currency_amount.currency()).or_insert(Decimal::ZERO) += currency_amount.amount();
    }

    totals
}
