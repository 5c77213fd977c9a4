use super::{fingerprint, Backup, BackupProcessor, FailureKind, ProcessorError, Snapshot};

use anyhow::Result;
use rust_decimal_macros::dec;

use crate::models::{MalformedRecordError, RawMessage};
use crate::parsers::{BankRegistry, ExtractionError};
use crate::types::{Bank, CounterKey, Currency};

const HBL_PURCHASE: &str = "Dear Customer, Your HBL CreditCard (ending with 8526) has been charged at IMTIAZ SUPER MARKET for PKR-25,170.49 on 01/Oct/2023.";
const HBL_USD_PURCHASE: &str = "Dear Customer, Your HBL CreditCard (ending with 8526) has been charged at AMAZON.COM for USD-120.00 on 05/Nov/2023.";
const HBL_OTP: &str = "648975 is your One Time Password (OTP) for the internet transaction on HBL Card ending with 0077.";

fn sms(address: &str, body: &str) -> RawMessage {
    RawMessage {
        address: Some(address.to_string()),
        body: Some(body.to_string()),
        date: Some(1_696_265_826_791),
        multimedia: Some(false)
    }
}

fn mms(address: &str, body: &str) -> RawMessage {
    RawMessage {
        multimedia: Some(true),
        ..sms(address, body)
    }
}

fn run(messages: Vec<RawMessage>) -> Result<Snapshot> {
    let backup = Backup {
        expected_count: messages.len() as i64,
        messages
    };

    Ok(BackupProcessor::new(BankRegistry::with_default_time_zone()?).run(&backup)?)
}

#[test]
fn test_processor_counts_duplicate_bodies_once() -> Result<()> {
    let snapshot = run(vec![sms("4250", HBL_PURCHASE), sms("4250", HBL_PURCHASE)])?;

    assert_eq!(snapshot.count(CounterKey::All), 2);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 1);
    assert_eq!(snapshot.transactions.len(), 1);
    assert_eq!(snapshot.duplicates, 1);

    Ok(())
}

#[test]
fn test_processor_treats_whitespace_padded_bodies_as_duplicates() -> Result<()> {
    let padded = format!("  {HBL_PURCHASE}\n");
    let snapshot = run(vec![sms("4250", HBL_PURCHASE), sms("4250", &padded)])?;

    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 1);
    assert_eq!(snapshot.transactions.len(), 1);

    Ok(())
}

#[test]
fn test_processor_dedups_across_different_senders() -> Result<()> {
    let snapshot = run(vec![sms("8756", "Your statement is ready"), sms("7220", "Your statement is ready")])?;

    assert_eq!(snapshot.count(CounterKey::All), 2);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Faysal)), 1);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::StandardChartered)), 0);

    Ok(())
}

#[test]
fn test_processor_counts_unknown_senders_as_other() -> Result<()> {
    let snapshot = run(vec![
        sms("+923001234567", HBL_PURCHASE),
        sms("Jazz", "Your bundle has expired"),
    ])?;

    assert_eq!(snapshot.count(CounterKey::Other), 2);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 0);
    assert!(snapshot.transactions.is_empty());
    assert!(snapshot.failures.is_empty());

    Ok(())
}

#[test]
fn test_processor_routes_each_bank_to_its_counter() -> Result<()> {
    let snapshot = run(vec![
        sms("4250", HBL_OTP),
        sms("8756", "FBL alert 1"),
        sms("7220", "SCB alert 1"),
        sms("8079", "Meezan alert 1"),
        sms("9779", "Meezan alert 2"),
    ])?;

    assert_eq!(snapshot.count(CounterKey::All), 5);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 1);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Faysal)), 1);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::StandardChartered)), 1);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Meezan)), 2);
    assert_eq!(snapshot.count(CounterKey::Other), 0);
    assert!(snapshot.transactions.is_empty());

    Ok(())
}

#[test]
fn test_processor_skips_multimedia_entirely() -> Result<()> {
    let snapshot = run(vec![mms("4250", HBL_PURCHASE), sms("4250", HBL_PURCHASE)])?;

    assert_eq!(snapshot.count(CounterKey::All), 1);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 1);
    assert_eq!(snapshot.duplicates, 0);
    assert_eq!(snapshot.transactions.len(), 1);

    Ok(())
}

#[test]
fn test_processor_extracts_transactions_in_order_and_collects_vendors() -> Result<()> {
    let snapshot = run(vec![
        sms("4250", HBL_PURCHASE),
        sms("4250", HBL_USD_PURCHASE),
        sms("4250", &HBL_PURCHASE.replace("01/Oct", "02/Oct")),
    ])?;

    assert_eq!(snapshot.transactions.len(), 3);
    assert_eq!(snapshot.transactions[0].currency_amount().amount(), dec!(25170.49));
    assert_eq!(snapshot.transactions[1].currency_amount().currency(), Currency::USD);
    assert_eq!(snapshot.transactions[1].currency_amount().amount(), dec!(120.00));
    assert_eq!(
        snapshot.vendors.iter().cloned().collect::<Vec<_>>(),
        vec!["AMAZON.COM".to_string(), "IMTIAZ SUPER MARKET".to_string()]
    );

    Ok(())
}

#[test]
fn test_processor_reports_bad_date_but_still_counts_bank() -> Result<()> {
    let body = HBL_PURCHASE.replace("01/Oct/2023", "99/Zzz/2023");
    let snapshot = run(vec![sms("4250", &body)])?;

    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 1);
    assert!(snapshot.transactions.is_empty());
    assert_eq!(snapshot.failures.len(), 1);
    assert!(matches!(snapshot.failures[0].error, FailureKind::Extraction(ExtractionError::DateParse { .. })));
    assert_eq!(snapshot.failures[0].address.as_deref(), Some("4250"));
    assert_eq!(snapshot.failures[0].body.as_deref(), Some(body.as_str()));

    Ok(())
}

#[test]
fn test_processor_continues_after_extraction_failures() -> Result<()> {
    let empty_vendor = "Dear Customer, Your HBL CreditCard (ending with 8526) has been charged at  for PKR-10.00 on 01/Oct/2023.";
    let snapshot = run(vec![sms("4250", empty_vendor), sms("4250", HBL_PURCHASE)])?;

    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 2);
    assert_eq!(snapshot.transactions.len(), 1);
    assert_eq!(snapshot.failures[0].error, FailureKind::Extraction(ExtractionError::EmptyVendor));
    assert!(!snapshot.vendors.contains(""));

    Ok(())
}

#[test]
fn test_processor_reports_malformed_records_without_aborting() -> Result<()> {
    let missing_body = RawMessage {
        body: None,
        ..sms("4250", "")
    };
    let missing_address = RawMessage {
        address: None,
        ..sms("", HBL_PURCHASE)
    };
    let snapshot = run(vec![missing_body, missing_address, sms("4250", HBL_PURCHASE)])?;

    assert_eq!(snapshot.count(CounterKey::All), 3);
    assert_eq!(snapshot.count(CounterKey::Bank(Bank::Hbl)), 1);
    assert_eq!(snapshot.transactions.len(), 1);
    assert_eq!(
        snapshot.failures.iter().map(|failure| failure.error.clone()).collect::<Vec<_>>(),
        vec![
            FailureKind::MalformedRecord(MalformedRecordError::MissingAttribute { attribute: "body" }),
            FailureKind::MalformedRecord(MalformedRecordError::MissingAttribute { attribute: "address" }),
        ]
    );

    Ok(())
}

#[test]
fn test_processor_handles_empty_backup() -> Result<()> {
    let snapshot = run(Vec::new())?;

    assert_eq!(snapshot.per_bank_counts.len(), 6);
    assert!(snapshot.per_bank_counts.values().all(|count| *count == 0));
    assert!(snapshot.transactions.is_empty());
    assert!(snapshot.vendors.is_empty());
    assert!(snapshot.failures.is_empty());

    Ok(())
}

#[test]
fn test_processor_rejects_negative_expected_count() -> Result<()> {
    let backup = Backup {
        expected_count: -1,
        messages: vec![sms("4250", HBL_PURCHASE)]
    };
    let result = BackupProcessor::new(BankRegistry::with_default_time_zone()?).run(&backup);

    assert_eq!(result.err(), Some(ProcessorError::NegativeExpectedCount { expected_count: -1 }));

    Ok(())
}

#[test]
fn test_separate_runs_do_not_share_state() -> Result<()> {
    let first = run(vec![sms("4250", HBL_PURCHASE)])?;
    let second = run(vec![sms("4250", HBL_PURCHASE)])?;

    assert_eq!(first.transactions.len(), 1);
    assert_eq!(second.transactions.len(), 1);
    assert_eq!(second.duplicates, 0);

    Ok(())
}

#[test]
fn test_fingerprint_ignores_surrounding_whitespace() {
    assert_eq!(fingerprint("hello"), fingerprint("  hello \n"));
    assert_ne!(fingerprint("hello"), fingerprint("Hello"));
    assert_eq!(fingerprint("").len(), 64);
}
