//! # cc_bincheck
//!
//! Card number checking with issuer identification by BIN range.
//!
//! Each candidate number goes through three steps:
//!
//! 1. Format check: 13 to 19 ASCII digits, nothing else
//! 2. Luhn checksum
//! 3. Issuer lookup: the first six digits (the BIN) are matched against a
//!    table of bank ranges, first loaded record wins
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_bincheck::bin::{BinTable, Issuer};
//! use cc_bincheck::{validate, ValidationError};
//!
//! let table = BinTable::parse("Visa, 400000, 499999").unwrap();
//!
//! let card = validate("4532015112830366").unwrap();
//! assert_eq!(table.lookup(card.bin()), Issuer::Known("Visa"));
//!
//! // Safe for logging - never exposes the full number
//! assert_eq!(card.masked_with_bin(), "453201******0366");
//!
//! assert_eq!(
//!     validate("4532015112830367").unwrap_err(),
//!     ValidationError::InvalidChecksum
//! );
//! ```
//!
//! ## Interactive Session
//!
//! ```rust
//! use cc_bincheck::bin::BinTable;
//! use cc_bincheck::input::ScriptedLines;
//! use cc_bincheck::report::TextReporter;
//! use cc_bincheck::session::Session;
//!
//! let table = BinTable::parse("Visa, 400000, 499999").unwrap();
//! let mut input = ScriptedLines::new(["4532015112830366", ""]);
//! let mut reporter = TextReporter::new(Vec::new());
//!
//! Session::new(&table).run(&mut input, &mut reporter).unwrap();
//!
//! let out = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(out.contains("Bank: Visa"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | JSON report rendering |
//! | `bin-csv` | CSV bank data loader (quoted names) |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - Card digits stored in fixed-size arrays, zeroized on drop
//! - `Debug` and `Display` show masked numbers only
//! - Logs and reports carry masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[path = "bindb/mod.rs"]
pub mod bin;
pub mod card;
pub mod error;
pub mod format;
pub mod input;
pub mod luhn;
pub mod mask;
pub mod report;
pub mod session;
pub mod validate;

// Re-export main types at crate root
pub use bin::{Bin, BinTable, Issuer};
pub use card::{CardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use error::{LoadError, ValidationError};
pub use report::Report;
pub use session::{Session, SessionSummary};
pub use validate::{extract_bin, is_valid, passes_luhn, validate};
