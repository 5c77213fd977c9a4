use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::engine::errors::{FailureKind, ProcessorError};
use crate::engine::snapshot::{MessageFailure, Snapshot};
use crate::models::{Message, RawMessage};
use crate::parsers::BankRegistry;
use crate::types::CounterKey;

/// The full message list of one phone backup.
#[derive(Debug, Clone, Default)]
pub struct Backup {
    /// Message count the backup container declares for itself.
    pub expected_count: i64,
    pub messages: Vec<RawMessage>
}

/// Streams one backup through dedup, bank routing, and extraction.
///
/// A processor is good for exactly one run: `run` consumes it, so the dedup
/// ledger and counters can never carry over between backups.
pub struct BackupProcessor {
    registry: BankRegistry,
    /// Fingerprint of a trimmed body mapped to the first body seen with it.
    ledger: HashMap<String, String>,
    snapshot: Snapshot
}

impl BackupProcessor {
    pub fn new(registry: BankRegistry) -> Self {
        debug!("Routing order: {:?}", registry.banks().collect::<Vec<_>>());

        Self {
            registry,
            ledger: HashMap::new(),
            snapshot: Snapshot::new()
        }
    }

    /// Processes every message once and returns the aggregated results.
    ///
    /// # Errors
    /// Returns `ProcessorError::NegativeExpectedCount` before touching any message
    /// when the backup's declared count is negative. Per-message problems never
    /// fail the run; they are collected in `Snapshot::failures`.
    pub fn run(mut self, backup: &Backup) -> Result<Snapshot, ProcessorError> {
        if backup.expected_count < 0 {
            return Err(ProcessorError::NegativeExpectedCount { expected_count: backup.expected_count });
        }

        if backup.messages.len() as i64 != backup.expected_count {
            warn!("Backup declared [{}] messages but contains [{}]", backup.expected_count, backup.messages.len());
        }

        for raw in &backup.messages {
            self.process(raw);
        }

        let processed = self.snapshot.count(CounterKey::All);

        info!(
            "Processed [{processed}] messages: [{}] duplicates, [{}] transactions, [{}] failures",
            self.snapshot.duplicates,
            self.snapshot.transactions.len(),
            self.snapshot.failures.len()
        );

        Ok(self.snapshot)
    }

    fn process(&mut self, raw: &RawMessage) {
        if raw.is_multimedia() {
            return;
        }

        self.snapshot.increment(CounterKey::All);

        let message = match Message::try_from(raw.clone()) {
            Ok(message) => message,
            Err(error) => {
                self.report(raw.address.clone(), raw.body.clone(), error.into());
                return;
            }
        };

        if self.is_duplicate(&message) {
            self.snapshot.duplicates += 1;
            return;
        }

        let Some(parser) = self.registry.route(&message.address) else {
            self.snapshot.increment(CounterKey::Other);
            return;
        };

        self.snapshot.increment(CounterKey::Bank(parser.bank()));

        if !parser.is_transaction_notification(&message.body) {
            return;
        }

        match parser.extract_transaction(&message.body) {
            Ok(transaction) => {
                debug!("Extracted from [{}] received at [{:?}]: {transaction}", message.address, message.received_at);
                self.snapshot.record_transaction(transaction);
            }
            Err(error) => self.report(Some(message.address), Some(message.body), error.into())
        }
    }

    /// Fingerprints the body once and records it in the ledger when first seen.
    fn is_duplicate(&mut self, message: &Message) -> bool {
        let fingerprint = fingerprint(&message.body);

        if let Some(original) = self.ledger.get(&fingerprint) {
            debug!("Duplicate message from [{}]: [{}] (first seen as [{original}])", message.address, message.body);
            return true;
        }

        self.ledger.insert(fingerprint, message.body.clone());

        false
    }

    fn report(&mut self, address: Option<String>, body: Option<String>, error: FailureKind) {
        warn!(
            "Skipping message from [{}]: {error} | body: [{}]",
            address.as_deref().unwrap_or("<missing>"),
            body.as_deref().unwrap_or("<missing>")
        );

        self.snapshot.failures.push(MessageFailure { address, body, error });
    }
}

/// Hex SHA-256 of the trimmed body.
pub fn fingerprint(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}
