mod errors;
mod hbl;
mod short_code;

use chrono::FixedOffset;

use crate::models::Transaction;
use crate::types::{default_time_zone, Bank};

pub use errors::{ExtractionError, ParserError};
pub use hbl::HblParser;
pub use short_code::ShortCodeParser;

/// The capability set every bank plugs into the processor with.
///
/// Implementations are stateless with respect to the messages they see.
pub trait BankSmsParser {
    fn bank(&self) -> Bank;

    /// Exact membership in the bank's short-code set.
    fn is_from_bank(&self, address: &str) -> bool {
        self.bank().owns_address(address)
    }

    /// Never fails; text that does not fit the notification template yields `false`.
    fn is_transaction_notification(&self, body: &str) -> bool;

    /// Expects a body that already passed `is_transaction_notification`.
    fn extract_transaction(&self, body: &str) -> Result<Transaction, ExtractionError>;
}

/// Ordered set of bank parsers. Routing picks the first parser that claims an address.
pub struct BankRegistry {
    parsers: Vec<Box<dyn BankSmsParser>>
}

impl BankRegistry {
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new()
        }
    }

    /// Registers every known bank in routing priority order.
    pub fn new(time_zone: FixedOffset) -> Result<Self, ParserError> {
        let mut registry = Self::empty();

        for bank in Bank::PRIORITY {
            match bank {
                Bank::Hbl => registry.register(HblParser::new(time_zone)?),
                _ => registry.register(ShortCodeParser::new(bank))
            }
        }

        Ok(registry)
    }

    pub fn with_default_time_zone() -> Result<Self, ParserError> {
        Self::new(default_time_zone())
    }

    pub fn register(&mut self, parser: impl BankSmsParser + 'static) {
        self.parsers.push(Box::new(parser));
    }

    pub fn route(&self, address: &str) -> Option<&dyn BankSmsParser> {
        self.parsers.iter()
            .find(|parser| parser.is_from_bank(address))
            .map(|parser| parser.as_ref())
    }

    pub fn banks(&self) -> impl Iterator<Item = Bank> + '_ {
        self.parsers.iter().map(|parser| parser.bank())
    }
}
