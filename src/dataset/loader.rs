//! One-shot bulk load of the KEN_ALL CSV into memory.
//!
//! The load is all-or-nothing: the first malformed row aborts the whole load
//! with the offending line number. There is no row-skipping policy, so the
//! service can never start serving over a partial dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::record::PostalRecord;
use crate::error::DatasetError;

/// Load every record from the CSV file at `path`, preserving file order.
pub fn load_from_path(path: &Path) -> Result<Vec<PostalRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(file)
}

/// Parse every record from `reader`, preserving input order.
///
/// The source has no header row; column typing is applied during parse per
/// the [`PostalRecord`] schema.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<PostalRecord>, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut records = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let record: PostalRecord = result.map_err(|source| {
            let line = source
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 1);
            DatasetError::Malformed { line, source }
        })?;

        records.push(record);
    }

    Ok(records)
}
