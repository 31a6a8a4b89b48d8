//! The interactive checking loop.
//!
//! Each cycle reads one line, and unless it terminates the session, yields
//! exactly one [`Report`]:
//!
//! ```text
//! AwaitInput --empty line / EOF--> Terminated
//! AwaitInput --line--> format check --fail--> FormatRejected
//!                                   --ok--> Luhn --fail--> ChecksumRejected
//!                                                --ok--> BIN lookup --> Identified | UnknownIssuer
//! ```
//!
//! Every report returns to `AwaitInput`; malformed input never ends the
//! session.

use crate::bin::{BinDatabase, Issuer};
use crate::input::LineSource;
use crate::mask::mask_string;
use crate::report::{Report, Reporter};
use crate::validate::validate;
use std::io;
use tracing::{debug, warn};

/// Counts of each outcome over a session run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Inputs rejected for length or characters.
    pub format_rejected: usize,
    /// Inputs rejected by the checksum.
    pub checksum_rejected: usize,
    /// Valid cards with a known issuer.
    pub identified: usize,
    /// Valid cards with no matching BIN range.
    pub unknown_issuer: usize,
}

impl SessionSummary {
    /// Records one report.
    pub fn record(&mut self, report: &Report) {
        match report {
            Report::FormatRejected { .. } => self.format_rejected += 1,
            Report::ChecksumRejected { .. } => self.checksum_rejected += 1,
            Report::Identified { .. } => self.identified += 1,
            Report::UnknownIssuer { .. } => self.unknown_issuer += 1,
        }
    }

    /// Total number of processed card numbers.
    pub fn total(&self) -> usize {
        self.format_rejected + self.checksum_rejected + self.identified + self.unknown_issuer
    }

    /// Number of valid card numbers, identified or not.
    pub fn valid(&self) -> usize {
        self.identified + self.unknown_issuer
    }
}

/// A checking session bound to a read-only bank table.
///
/// # Example
///
/// ```
/// use cc_bincheck::bin::BinTable;
/// use cc_bincheck::input::ScriptedLines;
/// use cc_bincheck::report::Report;
/// use cc_bincheck::session::Session;
///
/// let table = BinTable::parse("Visa,400000,499999").unwrap();
/// let session = Session::new(&table);
///
/// let mut input = ScriptedLines::new(["4532015112830366", ""]);
/// let mut reports: Vec<Report> = Vec::new();
/// let summary = session.run(&mut input, &mut reports).unwrap();
///
/// assert_eq!(summary.identified, 1);
/// assert_eq!(reports[0].bank(), Some("Visa"));
/// ```
#[derive(Debug)]
pub struct Session<'a, D: ?Sized> {
    db: &'a D,
}

impl<'a, D: BinDatabase + ?Sized> Session<'a, D> {
    /// Creates a session over `db`.
    pub fn new(db: &'a D) -> Self {
        Self { db }
    }

    /// Runs one check on a single, already trimmed input.
    pub fn evaluate(&self, input: &str) -> Report {
        let card = match validate(input) {
            Ok(card) => card,
            Err(reason) if reason.is_format_error() => {
                return Report::FormatRejected { reason };
            }
            Err(_) => {
                return Report::ChecksumRejected {
                    card: mask_string(input),
                };
            }
        };

        let masked = card.masked_with_bin();
        let bin = card.bin();

        match self.db.lookup(bin) {
            Issuer::Known(bank) => Report::Identified {
                card: masked,
                bin,
                bank: bank.to_string(),
            },
            Issuer::Unknown => Report::UnknownIssuer {
                card: masked,
                bin,
            },
        }
    }

    /// Runs the loop until an empty line or end of input.
    ///
    /// Lines are trimmed before checking; a line that is empty after
    /// trimming terminates the session.
    ///
    /// # Errors
    ///
    /// A read failure ends the session and is returned after the farewell
    /// is rendered. Write failures from the reporter are returned directly.
    pub fn run<S, R>(&self, source: &mut S, reporter: &mut R) -> io::Result<SessionSummary>
    where
        S: LineSource + ?Sized,
        R: Reporter + ?Sized,
    {
        let mut summary = SessionSummary::default();
        reporter.banner()?;

        loop {
            reporter.prompt()?;

            let line = match source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("end of input");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input, ending session");
                    reporter.farewell()?;
                    return Err(e);
                }
            };

            let input = line.trim();
            if input.is_empty() {
                debug!("empty line");
                break;
            }

            let report = self.evaluate(input);
            debug!(input = %mask_string(input), outcome = ?report, "card checked");
            summary.record(&report);
            reporter.report(&report)?;
        }

        reporter.farewell()?;
        debug!(
            total = summary.total(),
            valid = summary.valid(),
            "session finished"
        );
        Ok(summary)
    }
}
