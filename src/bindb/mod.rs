//! Bank Identification Number (BIN) table.
//!
//! Issuers are identified by matching the first six digits of a card
//! against inclusive numeric ranges, each mapped to a bank name.
//!
//! # Data format
//!
//! One record per line, three comma-separated fields, whitespace around
//! each field ignored:
//!
//! ```text
//! Visa Test Bank, 400000, 499999
//! Mastercard Test Bank, 510000, 559999
//! ```
//!
//! # Example
//!
//! ```
//! use cc_bincheck::bin::{Bin, BinTable, Issuer};
//!
//! let table = BinTable::parse("Visa,400000,499999").unwrap();
//! assert_eq!(table.lookup(Bin::new(453201).unwrap()), Issuer::Known("Visa"));
//! assert_eq!(table.lookup(Bin::new(999999).unwrap()), Issuer::Unknown);
//! ```

mod table;

#[cfg(feature = "bin-csv")]
mod csv;

pub use table::BinTable;

#[cfg(feature = "bin-csv")]
pub use csv::CsvBankLoader;

pub use crate::error::LoadError;

use std::fmt;

/// Largest value a six-digit BIN can take.
pub const MAX_BIN: u32 = 999_999;

/// Trait for issuer lookup by BIN.
///
/// [`BinTable`] is the provided implementation; the session accepts any
/// implementor so lookups can be swapped out in tests.
pub trait BinDatabase {
    /// Looks up the issuer for the given BIN.
    ///
    /// Absence of a match is [`Issuer::Unknown`], not an error.
    fn lookup(&self, bin: Bin) -> Issuer<'_>;

    /// Returns the number of records in the database.
    fn len(&self) -> usize;

    /// Returns true if the database is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A six-digit Bank Identification Number, 0..=999999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bin(u32);

impl Bin {
    /// Creates a BIN, or `None` if `value` exceeds 999999.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        if value <= MAX_BIN {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Internal constructor for values already known to be six digits.
    #[inline]
    pub(crate) const fn from_validated(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// One bank's BIN range.
///
/// Invariant: `bin_from <= bin_to <= 999999`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankRecord {
    name: String,
    bin_from: u32,
    bin_to: u32,
}

impl BankRecord {
    /// Creates a record, or `None` if the range is reversed or out of bounds.
    pub fn new(name: impl Into<String>, bin_from: u32, bin_to: u32) -> Option<Self> {
        if bin_from > bin_to || bin_to > MAX_BIN {
            return None;
        }
        Some(Self {
            name: name.into(),
            bin_from,
            bin_to,
        })
    }

    /// Bank name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Range start (inclusive).
    #[inline]
    pub const fn bin_from(&self) -> u32 {
        self.bin_from
    }

    /// Range end (inclusive).
    #[inline]
    pub const fn bin_to(&self) -> u32 {
        self.bin_to
    }

    /// Checks if a BIN falls within this record's range.
    #[inline]
    pub const fn contains(&self, bin: Bin) -> bool {
        bin.0 >= self.bin_from && bin.0 <= self.bin_to
    }

    /// Checks if two records' ranges share at least one BIN.
    #[inline]
    pub const fn overlaps(&self, other: &BankRecord) -> bool {
        self.bin_from <= other.bin_to && other.bin_from <= self.bin_to
    }
}

/// Result of an issuer lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issuer<'a> {
    /// The first loaded record covering the BIN.
    Known(&'a str),
    /// No record covers the BIN.
    Unknown,
}

impl<'a> Issuer<'a> {
    /// Returns the bank name, if known.
    #[inline]
    pub const fn name(&self) -> Option<&'a str> {
        match self {
            Self::Known(name) => Some(*name),
            Self::Unknown => None,
        }
    }

    /// Returns true if a record matched.
    #[inline]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for Issuer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::Unknown => f.write_str("unknown issuer"),
        }
    }
}

/// Parses one record's already-split fields.
///
/// Shared by the line loader and the CSV loader so both apply the same
/// trimming, parsing and range rules. `line` is 1-based.
pub(crate) fn parse_record(
    line: usize,
    name: &str,
    bin_from: &str,
    bin_to: &str,
) -> Result<BankRecord, LoadError> {
    let from = parse_bound(line, bin_from)?;
    let to = parse_bound(line, bin_to)?;

    BankRecord::new(name.trim(), from, to).ok_or(LoadError::InvalidRange { line, from, to })
}

fn parse_bound(line: usize, field: &str) -> Result<u32, LoadError> {
    let value = field.trim();
    value.parse::<u32>().map_err(|source| LoadError::Parse {
        line,
        value: value.to_string(),
        source,
    })
}
