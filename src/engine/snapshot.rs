use std::collections::{BTreeMap, BTreeSet};

use crate::engine::errors::FailureKind;
use crate::models::Transaction;
use crate::types::CounterKey;

/// A message that was counted but could not be turned into a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFailure {
    pub address: Option<String>,
    pub body: Option<String>,
    pub error: FailureKind
}

/// Everything a single backup run produced.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Message counts per bank, plus `ALL` and `OTHER`. Every key is present, starting at zero.
    pub per_bank_counts: BTreeMap<CounterKey, u64>,
    /// Extracted transactions in processing order.
    pub transactions: Vec<Transaction>,
    pub vendors: BTreeSet<String>,
    pub failures: Vec<MessageFailure>,
    /// Messages discarded because an identical body was already seen.
    pub duplicates: u64
}

impl Snapshot {
    pub fn new() -> Self {
        Self {
            per_bank_counts: CounterKey::all_keys().map(|key| (key, 0)).collect(),
            ..Self::default()
        }
    }

    pub fn count(&self, key: CounterKey) -> u64 {
        self.per_bank_counts.get(&key).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, key: CounterKey) {
        *self.per_bank_counts.entry(key).or_insert(0) += 1;
    }

    pub(crate) fn record_transaction(&mut self, transaction: Transaction) {
        self.vendors.insert(transaction.vendor().to_string());
        self.transactions.push(transaction);
    }
}
