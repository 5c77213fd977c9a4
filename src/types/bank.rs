use std::fmt;
use std::fmt::{Display, Formatter};

/// Banks whose SMS gateways are recognised, keyed by their short codes.
///
/// Short-code sets are pairwise disjoint, so at most one bank claims any address.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bank {
    Hbl,
    Faysal,
    StandardChartered,
    Meezan
}

impl Bank {
    /// The order in which address membership is checked; the first match wins.
    pub const PRIORITY: [Bank; 4] = [Bank::Hbl, Bank::Faysal, Bank::StandardChartered, Bank::Meezan];

    pub fn short_codes(&self) -> &'static [&'static str] {
        match self {
            Bank::Hbl => &["4250"],
            Bank::Faysal => &["8756"],
            Bank::StandardChartered => &["7220"],
            Bank::Meezan => &["8079", "9779"]
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Bank::Hbl => "HBL",
            Bank::Faysal => "FBL",
            Bank::StandardChartered => "SCB",
            Bank::Meezan => "MEZN"
        }
    }

    /// Exact string membership only, no normalization of the address.
    pub fn owns_address(&self, address: &str) -> bool {
        self.short_codes().contains(&address)
    }
}

impl Display for Bank {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Keys of the per-run message counters.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CounterKey {
    All,
    Bank(Bank),
    Other
}

impl CounterKey {
    pub fn all_keys() -> impl Iterator<Item = CounterKey> {
        std::iter::once(CounterKey::All)
            .chain(Bank::PRIORITY.into_iter().map(CounterKey::Bank))
            .chain(std::iter::once(CounterKey::Other))
    }
}

impl Display for CounterKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CounterKey::All => formatter.write_str("ALL"),
            CounterKey::Bank(bank) => formatter.write_str(bank.code()),
            CounterKey::Other => formatter.write_str("OTHER")
        }
    }
}
