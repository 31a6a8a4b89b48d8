//! CSV bank data loader.
//!
//! Reads the same headerless `<name>,<from>,<to>` format as
//! [`BinTable::from_lines`](super::BinTable::from_lines), but through the
//! `csv` crate so that quoted bank names may contain commas:
//!
//! ```csv
//! "Bank of Example, N.A.", 400000, 449999
//! Plain Bank, 450000, 499999
//! ```
//!
//! Unlike the line loader, blank lines are skipped by the CSV reader.
//!
//! # Feature
//!
//! Requires the `bin-csv` feature.

use super::{parse_record, BinTable, LoadError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV bank data loader.
pub struct CsvBankLoader;

impl CsvBankLoader {
    /// Loads a table from a CSV file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BinTable, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads a table from a reader.
    ///
    /// Same all-or-nothing rules as the line loader: any record without
    /// exactly three fields, or with a bad bound, aborts the load.
    pub fn from_reader<R: Read>(reader: R) -> Result<BinTable, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (i, result) in csv_reader.records().enumerate() {
            let record = result.map_err(LoadError::Csv)?;
            let line = record.position().map_or(i + 1, |p| p.line() as usize);

            match (record.get(0), record.get(1), record.get(2), record.len()) {
                (Some(name), Some(from), Some(to), 3) => {
                    records.push(parse_record(line, name, from, to)?);
                }
                (.., found) => return Err(LoadError::FieldCount { line, found }),
            }
        }

        Ok(BinTable::loaded(records))
    }

    /// Loads a table from a CSV string.
    pub fn parse(data: &str) -> Result<BinTable, LoadError> {
        Self::from_reader(data.as_bytes())
    }
}
