use thiserror::Error;

use crate::models::MalformedRecordError;
use crate::parsers::ExtractionError;

/// Run-level failures. These are raised before any message is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("Backup declares a negative expected message count [{expected_count}]")]
    NegativeExpectedCount {
        expected_count: i64
    }
}

/// Why a single message did not produce a transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FailureKind {
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError)
}
