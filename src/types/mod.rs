mod bank;
mod currency;
mod errors;

use chrono::{FixedOffset, Offset, Utc};

pub use bank::{Bank, CounterKey};
pub use currency::{Currency, CurrencyAmount};
pub use errors::CurrencyError;

/// Asia/Karachi has been a fixed +05:00 with no daylight saving since 2009.
pub const DEFAULT_UTC_OFFSET_SECONDS: i32 = 5 * 3600;

pub fn default_time_zone() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}
