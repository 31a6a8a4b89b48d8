//! Per-cycle session reports and their rendering.
//!
//! Every processed card number yields exactly one [`Report`]. A
//! [`Reporter`] turns session events into output; [`TextReporter`] prints
//! the interactive console texts, [`JsonReporter`] prints one JSON object
//! per report.

use crate::bin::Bin;
use crate::error::ValidationError;
use std::io::{self, Write};

/// Outcome of checking one card number.
///
/// Card numbers are carried masked only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum Report {
    /// Wrong length or a non-digit character. The checksum was not run.
    FormatRejected {
        /// Why the input was rejected.
        reason: ValidationError,
    },

    /// Well formed, but the Luhn checksum failed.
    ChecksumRejected {
        /// Masked input.
        card: String,
    },

    /// Valid card, issuer found in the bank table.
    Identified {
        /// Masked card number (BIN and last four).
        card: String,
        /// The card's BIN.
        bin: Bin,
        /// Name of the issuing bank.
        bank: String,
    },

    /// Valid card, but no issuer could be determined.
    UnknownIssuer {
        /// Masked card number (BIN and last four).
        card: String,
        /// The card's BIN.
        bin: Bin,
    },
}

impl Report {
    /// Returns true for the two outcomes where the card number is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Identified { .. } | Self::UnknownIssuer { .. })
    }

    /// Returns the bank name for an identified card.
    #[inline]
    pub fn bank(&self) -> Option<&str> {
        match self {
            Self::Identified { bank, .. } => Some(bank.as_str()),
            _ => None,
        }
    }
}

/// Receives session events and renders them.
///
/// Only [`Reporter::report`] is required; banner, prompt and farewell
/// default to printing nothing.
pub trait Reporter {
    /// Called once before the first prompt.
    fn banner(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called before each line is read.
    fn prompt(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called once per processed card number.
    fn report(&mut self, report: &Report) -> io::Result<()>;

    /// Called once when the session terminates.
    fn farewell(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects reports in memory.
impl Reporter for Vec<Report> {
    fn report(&mut self, report: &Report) -> io::Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Human-readable console output.
#[derive(Debug)]
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to the card validation program!")
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Enter card number: ")?;
        self.out.flush()
    }

    fn report(&mut self, report: &Report) -> io::Result<()> {
        match report {
            Report::FormatRejected { reason } => writeln!(
                self.out,
                "Invalid format: only digits allowed, length 13-19 ({})",
                reason
            ),
            Report::ChecksumRejected { .. } => {
                writeln!(self.out, "Card number fails checksum validation")
            }
            Report::Identified { bank, .. } => {
                writeln!(self.out, "Card number is valid")?;
                writeln!(self.out, "Bank: {}", bank)
            }
            Report::UnknownIssuer { .. } => {
                writeln!(self.out, "Card number is valid")?;
                writeln!(self.out, "Issuer not identified")
            }
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "Exiting program")?;
        self.out.flush()
    }
}

/// One JSON object per line for each report; no banner or prompts.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub struct JsonReporter<W> {
    out: W,
}

#[cfg(feature = "serde")]
impl<W: Write> JsonReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(feature = "serde")]
impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, report: &Report) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
