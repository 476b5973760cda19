use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::{Dataset, Record};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a CSV export from disk. See [`parse_records`].
pub fn read_records(path: &Path) -> Result<Dataset> {
    let bytes = fs::read(path)?;
    let records = parse_records(&bytes)?;
    debug!(path = %path.display(), row_count = records.len(), "read CSV export");
    Ok(records)
}

/// Parses CSV bytes with a header row into records, preserving row order.
///
/// A leading UTF-8 byte-order mark is ignored. Rows whose field count differs
/// from the header fail with the underlying [`csv::Error`].
pub fn parse_records(bytes: &[u8]) -> Result<Dataset> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body);

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row?);
    }
    Ok(records)
}
