//! CSV data files.
//!
//! A CSV file becomes either a list of records, one per data row, or a flat
//! variable mapping when its header carries the reserved key/value columns:
//!
//! ```text
//! __CCkey,__CCvalue
//! domain,example.net
//! ntp_server,10.0.0.1
//! ```

use crate::constants::{RESERVED_KEY_COLUMN, RESERVED_VALUE_COLUMN};
use crate::error::{Error, Result};
use crate::loader::{DataSet, Record};
use csv::ReaderBuilder;
use indexmap::IndexMap;
use log::warn;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a CSV file with a header row.
///
/// # Errors
/// * `Error::ReadError` if the file can not be opened
/// * `Error::CsvError` if the content is not valid CSV
/// * `Error::CsvKeyWithoutValue` if a row uses the reserved key column
///   but the header has no reserved value column
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<DataSet> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| Error::ReadError { file: path.display().to_string(), source })?;
    parse_csv(file, &path.display().to_string())
}

/// Parses CSV content. `origin` names the content in error messages.
pub fn parse_csv<R: Read>(reader: R, origin: &str) -> Result<DataSet> {
    let csv_error = |source| Error::CsvError { file: origin.to_string(), source };

    let mut rdr = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let headers: Vec<String> =
        rdr.headers().map_err(csv_error)?.iter().map(|h| h.trim().to_string()).collect();

    let has_key = headers.iter().any(|h| h == RESERVED_KEY_COLUMN);
    let has_value = headers.iter().any(|h| h == RESERVED_VALUE_COLUMN);

    let mut records = Vec::new();
    let mut variables = IndexMap::new();

    for (index, result) in rdr.records().enumerate() {
        let raw = result.map_err(csv_error)?;
        // header is line 1
        let line = index + 2;

        if raw.len() > headers.len() {
            warn!(
                "{origin}:{line}: {} cells beyond the header are ignored",
                raw.len() - headers.len()
            );
        }

        let mut row = Record::new();
        for (position, header) in headers.iter().enumerate() {
            let cell = raw.get(position).map(|value| value.trim().to_string());
            row.insert(header.clone(), cell);
        }

        if !has_key {
            records.push(row);
            continue;
        }
        if !has_value {
            return Err(Error::CsvKeyWithoutValue {
                file: origin.to_string(),
                key_column: RESERVED_KEY_COLUMN,
                value_column: RESERVED_VALUE_COLUMN,
            });
        }

        let value = row.swap_remove(RESERVED_VALUE_COLUMN).flatten();
        match row.swap_remove(RESERVED_KEY_COLUMN).flatten() {
            Some(key) => {
                variables.insert(key, value);
            }
            None => warn!("{origin}:{line}: row has no {RESERVED_KEY_COLUMN} cell, skipping"),
        }
    }

    if records.is_empty() {
        Ok(DataSet::Variables(variables))
    } else {
        Ok(DataSet::Records(records))
    }
}
