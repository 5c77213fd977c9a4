use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    #[error("Malformed record: missing required attribute [{attribute}]")]
    MissingAttribute {
        attribute: &'static str
    },
    #[error("Malformed record: timestamp [{millis}] is out of range")]
    InvalidTimestamp {
        millis: i64
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Transaction vendor must not be empty")]
    EmptyVendor
}
