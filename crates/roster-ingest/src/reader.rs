use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::RawRow;

use crate::error::Result;

/// Read a roster CSV into raw field maps, one per record.
///
/// The whole file is loaded up front (inputs are small, single-run batch
/// files). The first record supplies the field names. Records shorter than
/// the header leave their trailing fields absent rather than empty; cells
/// are kept verbatim, no trimming. Unreadable files, non-UTF-8 content, and
/// malformed CSV propagate as errors.
pub fn read_roster(path: &Path) -> Result<Vec<RawRow>> {
    let contents = fs::read_to_string(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "roster loaded");
    Ok(rows)
}
