use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::errors::TransactionError;
use crate::types::CurrencyAmount;

/// A credit-card charge extracted from a bank notification.
///
/// Immutable once built; the only way in is through a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    currency_amount: CurrencyAmount,
    /// When the charge happened, as stated in the message body.
    occurred_at: DateTime<FixedOffset>,
    vendor: String,
    /// Last four digits of the card, 0 when the message does not say.
    card_last_four_digits: u16
}

impl Transaction {
    pub fn new(
        currency_amount: CurrencyAmount,
        occurred_at: DateTime<FixedOffset>,
        vendor: impl Into<String>,
        card_last_four_digits: u16
    ) -> Result<Self, TransactionError> {
        let vendor: String = vendor.into();
        let vendor = vendor.trim().to_string();

        if vendor.is_empty() {
            return Err(TransactionError::EmptyVendor);
        }

        Ok(Self {
            currency_amount,
            occurred_at,
            vendor,
            card_last_four_digits
        })
    }

    pub fn currency_amount(&self) -> CurrencyAmount {
        self.currency_amount
    }

    pub fn occurred_at(&self) -> DateTime<FixedOffset> {
        self.occurred_at
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn card_last_four_digits(&self) -> u16 {
        self.card_last_four_digits
    }

    pub fn has_known_card(&self) -> bool {
        self.card_last_four_digits != 0
    }
}

impl Display for Transaction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "CC Txn: {} at {} on {}", self.currency_amount, self.vendor, self.occurred_at)?;

        if self.has_known_card() {
            write!(formatter, " (card ending {:04})", self.card_last_four_digits)?;
        }

        Ok(())
    }
}
