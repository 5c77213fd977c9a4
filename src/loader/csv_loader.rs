use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, error};

use crate::engine::Backup;
use crate::models::RawMessage;

/// Loads an exported message list (`address,body,date,multimedia`) from a CSV file.
pub fn load_backup(path: impl AsRef<Path>) -> Result<Backup> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Error opening message backup at path: {}", path.display()))?;

    Ok(read_backup(BufReader::new(file)))
}

/// Rows that cannot be deserialized are logged and skipped; the declared
/// count is the number of rows the reader saw.
pub fn read_backup(reader: impl Read) -> Backup {
    //NOTE: Only headers are trimmed, bodies keep their whitespace so dedup sees the raw text
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut rows: i64 = 0;
    let mut messages = Vec::new();

    for result in reader.deserialize::<RawMessage>() {
        rows += 1;

        match result {
            Ok(message) => messages.push(message),
            Err(error) => error!("CSV deserialization error: {error}")
        }
    }

    debug!("Loaded [{}] of [{rows}] message rows", messages.len());

    Backup {
        expected_count: rows,
        messages
    }
}
