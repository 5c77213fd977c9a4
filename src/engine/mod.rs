mod backup_processor;
mod errors;
mod snapshot;
#[cfg(test)]
mod tests;

pub use backup_processor::{fingerprint, Backup, BackupProcessor};
pub use errors::{FailureKind, ProcessorError};
pub use snapshot::{MessageFailure, Snapshot};
