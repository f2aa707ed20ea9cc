//! CSV attachment records.
//!
//! Several vendors attach their findings as CSV. Rows are returned as maps
//! keyed by the lower-cased, trimmed header name so adapters can look up
//! columns without caring about the vendor's capitalization.

use std::collections::HashMap;

use log::debug;

/// One CSV row, keyed by lower-cased header name.
pub type Record = HashMap<String, String>;

/// Parses comma-separated `text` into records.
///
/// See [`records_with_delimiter`].
pub fn records(text: &str) -> Vec<Record> {
    records_with_delimiter(text, b',')
}

/// Parses delimited `text` into records.
///
/// The first row is the header. Rows may be shorter or longer than the
/// header: missing columns are absent from the record and extra columns are
/// dropped. Rows that fail to parse are skipped. Never fails; unreadable input
/// yields an empty `Vec`.
pub fn records_with_delimiter(text: &str, delimiter: u8) -> Vec<Record> {
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(|h| h.to_lowercase()).collect(),
        Err(e) => {
            debug!("Unreadable CSV header: {e}");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(row) => rows.push(
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(name, value)| (name.clone(), value.to_string()))
                    .collect(),
            ),
            Err(e) => debug!("Skipping malformed CSV row {}: {e}", index + 1),
        }
    }
    rows
}

/// Collects the non-empty values of `column` across `rows`, in row order.
pub fn column_values(rows: &[Record], column: &str) -> Vec<String> {
    let key = column.to_lowercase();
    rows.iter()
        .filter_map(|row| row.get(&key))
        .filter(|value| !value.is_empty())
        .cloned()
        .collect()
}
