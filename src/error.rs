//! Error types for card checking and bank data loading.
//!
//! [`ValidationError`] covers the recoverable, per-input failures: the
//! session reports them and prompts again. [`LoadError`] is fatal and
//! aborts startup before any card is read.

use std::fmt;
use std::num::ParseIntError;

/// Errors that can occur while checking a single card number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "error", rename_all = "snake_case"))]
pub enum ValidationError {
    /// The card number has too few characters.
    TooShort {
        /// The actual number of characters provided.
        length: usize,
        /// The minimum required digits (13).
        minimum: usize,
    },

    /// The card number has too many characters.
    TooLong {
        /// The actual number of characters provided.
        length: usize,
        /// The maximum allowed digits (19).
        maximum: usize,
    },

    /// A character other than `0`-`9` was found.
    InvalidCharacter {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The input is well formed but the Luhn checksum failed.
    InvalidChecksum,
}

impl ValidationError {
    /// Returns true for the format failures (length or character), which
    /// are detected before the checksum is ever computed.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::InvalidChecksum)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} characters, minimum is {}",
                    length, minimum
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} characters, maximum is {}",
                    length, maximum
                )
            }

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error raised while loading the bank table.
///
/// Any variant aborts the whole load; a table is never returned partially.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to open or read the data source.
    Io(std::io::Error),

    /// A line did not split into exactly three fields.
    FieldCount {
        /// 1-based line number in the source.
        line: usize,
        /// Number of fields found.
        found: usize,
    },

    /// A range bound was not a valid non-negative integer.
    Parse {
        /// 1-based line number in the source.
        line: usize,
        /// The trimmed text that failed to parse.
        value: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// A range is reversed or exceeds the six-digit BIN space.
    InvalidRange {
        /// 1-based line number in the source.
        line: usize,
        /// Range start.
        from: u32,
        /// Range end.
        to: u32,
    },

    /// The quoted-CSV reader rejected the input.
    #[cfg(feature = "bin-csv")]
    Csv(csv::Error),
}

impl LoadError {
    /// Returns the 1-based source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::FieldCount { line, .. }
            | Self::Parse { line, .. }
            | Self::InvalidRange { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::FieldCount { line, found } => {
                write!(f, "line {}: expected 3 fields, found {}", line, found)
            }
            Self::Parse { line, value, source } => {
                write!(f, "line {}: invalid number '{}': {}", line, value, source)
            }
            Self::InvalidRange { line, from, to } => {
                write!(
                    f,
                    "line {}: invalid BIN range {}-{} (bounds must be ordered and at most 999999)",
                    line, from, to
                )
            }
            #[cfg(feature = "bin-csv")]
            Self::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { source, .. } => Some(source),
            #[cfg(feature = "bin-csv")]
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
