use crate::types::errors::CurrencyError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The currencies a card transaction can be charged in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Currency {
    PKR,
    USD,
    CAD
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::PKR, Currency::USD, Currency::CAD];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::PKR => "PKR",
            Currency::USD => "USD",
            Currency::CAD => "CAD"
        }
    }
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        Currency::ALL.into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(value))
            .ok_or_else(|| CurrencyError::Unsupported(value.to_string()))
    }
}

/// A non-negative amount tagged with the currency it was charged in.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CurrencyAmount {
    currency: Currency,
    amount: Decimal
}

impl CurrencyAmount {
    pub fn new(currency: Currency, amount: Decimal) -> Result<Self, CurrencyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CurrencyError::NegativeAmount(amount));
        }

        Ok(Self { currency, amount })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Display for CurrencyAmount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {:.2}", self.currency, self.amount)
    }
}
