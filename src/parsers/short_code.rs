use crate::models::Transaction;
use crate::parsers::errors::ExtractionError;
use crate::parsers::BankSmsParser;
use crate::types::Bank;

/// Identifies a bank's messages by short code without extracting anything from them.
pub struct ShortCodeParser {
    bank: Bank
}

impl ShortCodeParser {
    pub fn new(bank: Bank) -> Self {
        Self { bank }
    }
}

impl BankSmsParser for ShortCodeParser {
    fn bank(&self) -> Bank {
        self.bank
    }

    fn is_transaction_notification(&self, _body: &str) -> bool {
        false
    }

    fn extract_transaction(&self, _body: &str) -> Result<Transaction, ExtractionError> {
        Err(ExtractionError::Unsupported { bank: self.bank })
    }
}
