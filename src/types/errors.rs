use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Currency error: unsupported currency code [{0}]")]
    Unsupported(String),
    #[error("Currency error: amount [{0}] is negative")]
    NegativeAmount(Decimal)
}
