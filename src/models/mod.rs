mod errors;
mod message;
mod transaction;

pub use errors::{MalformedRecordError, TransactionError};
pub use message::{Message, RawMessage};
pub use transaction::Transaction;
