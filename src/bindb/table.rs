//! In-memory BIN table with first-match range lookup.
//!
//! Records keep their load order. Lookup is a linear scan, so when ranges
//! overlap the earliest loaded record wins.

use super::{parse_record, BankRecord, Bin, BinDatabase, Issuer, LoadError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Ordered table of bank BIN ranges.
///
/// Built once before the session starts and read-only afterwards.
///
/// # Example
///
/// ```
/// use cc_bincheck::bin::{Bin, BinTable, Issuer};
///
/// let table = BinTable::from_lines([
///     "Early Bank, 400000, 449999",
///     "Visa, 400000, 499999",
/// ])
/// .unwrap();
///
/// let bin = Bin::new(420000).unwrap();
/// assert_eq!(table.lookup(bin), Issuer::Known("Early Bank"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinTable {
    records: Vec<BankRecord>,
}

impl BinTable {
    /// Creates a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from records, keeping their order.
    pub fn from_records(records: Vec<BankRecord>) -> Self {
        Self { records }
    }

    /// Loads a table from `<name>,<from>,<to>` lines.
    ///
    /// All-or-nothing: the first bad line aborts the load.
    ///
    /// # Errors
    ///
    /// * [`LoadError::FieldCount`] if a line does not have exactly three fields
    ///   (a blank line has one).
    /// * [`LoadError::Parse`] if a bound is not a non-negative integer.
    /// * [`LoadError::InvalidRange`] if a range is reversed or above 999999.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| parse_line(i + 1, line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::loaded(records))
    }

    /// Loads a table from a buffered reader.
    ///
    /// Read failures abort the load the same way malformed lines do.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_lines(lines)
    }

    /// Loads a table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading bank data");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a table from an in-memory string.
    pub fn parse(data: &str) -> Result<Self, LoadError> {
        Self::from_lines(data.lines())
    }

    /// Returns the issuer of the first record whose range contains `bin`.
    pub fn lookup(&self, bin: Bin) -> Issuer<'_> {
        self.records
            .iter()
            .find(|record| record.contains(bin))
            .map_or(Issuer::Unknown, |record| Issuer::Known(record.name()))
    }

    /// Returns the records in load order.
    pub fn records(&self) -> &[BankRecord] {
        &self.records
    }

    /// Returns an iterator over all records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &BankRecord> {
        self.records.iter()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns index pairs `(earlier, later)` of records whose ranges overlap.
    ///
    /// Overlaps are allowed; for BINs in the shared part the earlier record
    /// is reported.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.records.iter().enumerate() {
            for (j, b) in self.records.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Builds a table from freshly loaded records and logs its overlaps.
    pub(crate) fn loaded(records: Vec<BankRecord>) -> Self {
        let table = Self::from_records(records);
        debug!(records = table.records.len(), "bank table loaded");
        for (i, j) in table.overlapping_pairs() {
            debug!(
                earlier = table.records[i].name(),
                later = table.records[j].name(),
                "overlapping BIN ranges, earlier record takes precedence"
            );
        }
        table
    }
}

impl BinDatabase for BinTable {
    fn lookup(&self, bin: Bin) -> Issuer<'_> {
        BinTable::lookup(self, bin)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

fn parse_line(line: usize, text: &str) -> Result<BankRecord, LoadError> {
    let fields: Vec<&str> = text.split(',').collect();
    match fields.as_slice() {
        [name, from, to] => parse_record(line, name, from, to),
        _ => Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        }),
    }
}
