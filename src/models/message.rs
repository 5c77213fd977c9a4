use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::models::errors::MalformedRecordError;

/// A single message record as exported from the phone backup.
///
/// Every attribute is optional at this stage so that a record missing its
/// address or body can be reported instead of silently dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    /// Sender identifier (a bank short code, a phone number, ...).
    pub address: Option<String>,
    /// Message text.
    pub body: Option<String>,
    /// Milliseconds since the Unix epoch at which the message was received.
    /// An unreadable value leaves the row intact with no timestamp.
    #[serde(deserialize_with = "csv::invalid_option")]
    pub date: Option<i64>,
    /// MMS records are carried alongside SMS records in the backup.
    /// Accepts `true`/`false` as well as the `1`/`0` Android exports use.
    #[serde(deserialize_with = "deserialize_flag")]
    pub multimedia: Option<bool>
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.and_then(|flag| match flag.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None
    }))
}

impl RawMessage {
    pub fn is_multimedia(&self) -> bool {
        self.multimedia.unwrap_or(false)
    }
}

/// A validated, non-multimedia message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub address: String,
    pub body: String,
    pub received_at: Option<DateTime<Utc>>
}

impl TryFrom<RawMessage> for Message {
    type Error = MalformedRecordError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let address = raw.address.ok_or(MalformedRecordError::MissingAttribute { attribute: "address" })?;
        let body = raw.body.ok_or(MalformedRecordError::MissingAttribute { attribute: "body" })?;

        let received_at = match raw.date {
            Some(millis) => Some(
                DateTime::from_timestamp_millis(millis)
                    .ok_or(MalformedRecordError::InvalidTimestamp { millis })?
            ),
            None => None
        };

        Ok(Self { address, body, received_at })
    }
}
