use thiserror::Error;

use crate::types::Bank;

/// Per-message extraction failures. None of these abort a backup run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Amount [{text}] could not be converted to a number: {reason}")]
    AmountParse {
        text: String,
        reason: String
    },
    #[error("Date [{text}] could not be parsed")]
    DateParse {
        text: String
    },
    #[error("Message did not contain the expected [{field}]")]
    Mismatch {
        field: &'static str
    },
    #[error("Vendor is empty after trimming")]
    EmptyVendor,
    #[error("No transaction extractor exists for bank [{bank}]")]
    Unsupported {
        bank: Bank
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Parser error: invalid pattern: {0}")]
    Pattern(#[from] regex::Error)
}
