use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use regex::{Captures, Regex};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use crate::models::{Transaction, TransactionError};
use crate::parsers::errors::{ExtractionError, ParserError};
use crate::parsers::BankSmsParser;
use crate::types::{Bank, Currency, CurrencyAmount};

const NOTIFICATION_PREFIX: &str = "Dear Customer, Your HBL CreditCard";
const NOTIFICATION_MARKER: &str = "has been charged at";

// Dear Customer, Your HBL CreditCard (ending with 8526) has been charged at IMTIAZ SUPER MARKET for PKR-25,170.49 on 01/Oct/2023.
const TEMPLATE_PATTERN: &str = concat!(
    r"(?s)^Dear Customer, Your HBL CreditCard",
    r"(?:\s*\(ending with (?P<card>\d{4})\))?",
    r"\s+has been charged at(?P<vendor>.*)",
    r" for (?P<amount>[A-Za-z]{3}\s*-?\s*[0-9][0-9,.]*)",
    r" on (?P<date>\S+?)\.?(?:\s.*)?$"
);
const CURRENCY_AMOUNT_PATTERN: &str = r"(?i)^(?P<currency>PKR|USD|CAD)\s*-?\s*(?P<amount>[0-9][0-9,.]*)$";

const DATE_FORMATS: [&str; 4] = ["%d/%b/%Y", "%d/%B/%Y", "%d-%b-%Y", "%d/%m/%Y"];

/// Extracts credit-card charges from HBL notification messages.
pub struct HblParser {
    template: Regex,
    currency_amount: Regex,
    time_zone: FixedOffset
}

impl HblParser {
    /// Compiles the message patterns once; `time_zone` is applied to the dates found in bodies.
    pub fn new(time_zone: FixedOffset) -> Result<Self, ParserError> {
        Ok(Self {
            template: Regex::new(TEMPLATE_PATTERN)?,
            currency_amount: Regex::new(CURRENCY_AMOUNT_PATTERN)?,
            time_zone
        })
    }

    pub fn extract_currency_amount(&self, body: &str) -> Result<CurrencyAmount, ExtractionError> {
        self.currency_amount_from(&self.captures(body)?)
    }

    pub fn extract_vendor(&self, body: &str) -> Result<String, ExtractionError> {
        vendor_from(&self.captures(body)?)
    }

    pub fn extract_date(&self, body: &str) -> Result<DateTime<FixedOffset>, ExtractionError> {
        self.date_from(&self.captures(body)?)
    }

    /// Absence of the card suffix is not an error; it yields 0.
    pub fn extract_card_suffix(&self, body: &str) -> u16 {
        self.template.captures(body)
            .map(|captures| card_suffix_from(&captures))
            .unwrap_or(0)
    }

    fn captures<'b>(&self, body: &'b str) -> Result<Captures<'b>, ExtractionError> {
        self.template.captures(body).ok_or(ExtractionError::Mismatch { field: "template" })
    }

    fn currency_amount_from(&self, captures: &Captures<'_>) -> Result<CurrencyAmount, ExtractionError> {
        self.parse_currency_amount(capture(captures, "amount")?)
    }

    fn date_from(&self, captures: &Captures<'_>) -> Result<DateTime<FixedOffset>, ExtractionError> {
        self.parse_date(capture(captures, "date")?)
    }

    fn parse_currency_amount(&self, text: &str) -> Result<CurrencyAmount, ExtractionError> {
        let captures = self.currency_amount.captures(text.trim())
            .ok_or(ExtractionError::Mismatch { field: "currency" })?;

        let currency = Currency::from_str(capture(&captures, "currency")?)
            .map_err(|_| ExtractionError::Mismatch { field: "currency" })?;

        let amount_text = capture(&captures, "amount")?;
        let amount = Decimal::from_str(&amount_text.replace(',', "")).map_err(|error| {
            ExtractionError::AmountParse { text: amount_text.to_string(), reason: error.to_string() }
        })?;

        CurrencyAmount::new(currency, amount).map_err(|error| {
            ExtractionError::AmountParse { text: amount_text.to_string(), reason: error.to_string() }
        })
    }

    fn parse_date(&self, text: &str) -> Result<DateTime<FixedOffset>, ExtractionError> {
        let trimmed = text.trim().trim_end_matches('.').trim();

        DATE_FORMATS.iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .and_then(|local| self.time_zone.from_local_datetime(&local).single())
            .ok_or_else(|| ExtractionError::DateParse { text: trimmed.to_string() })
    }
}

impl BankSmsParser for HblParser {
    fn bank(&self) -> Bank {
        Bank::Hbl
    }

    fn is_transaction_notification(&self, body: &str) -> bool {
        body.starts_with(NOTIFICATION_PREFIX) && body.contains(NOTIFICATION_MARKER)
    }

    fn extract_transaction(&self, body: &str) -> Result<Transaction, ExtractionError> {
        let captures = self.captures(body)?;

        let currency_amount = self.currency_amount_from(&captures);
        let vendor = vendor_from(&captures);
        let occurred_at = self.date_from(&captures);
        let card_last_four_digits = card_suffix_from(&captures);

        trace!("HBL captures: amount={currency_amount:?} vendor={vendor:?} date={occurred_at:?} card={card_last_four_digits}");

        Transaction::new(currency_amount?, occurred_at?, vendor?, card_last_four_digits)
            .map_err(|error| match error {
                TransactionError::EmptyVendor => ExtractionError::EmptyVendor
            })
    }
}

fn capture<'b>(captures: &Captures<'b>, field: &'static str) -> Result<&'b str, ExtractionError> {
    captures.name(field)
        .map(|m| m.as_str())
        .ok_or(ExtractionError::Mismatch { field })
}

fn vendor_from(captures: &Captures<'_>) -> Result<String, ExtractionError> {
    let vendor = capture(captures, "vendor")?.trim();

    if vendor.is_empty() {
        return Err(ExtractionError::EmptyVendor);
    }

    Ok(vendor.to_string())
}

fn card_suffix_from(captures: &Captures<'_>) -> u16 {
    captures.name("card")
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(0)
}
