//! The validated card number type.
//!
//! A [`CardNumber`] only exists for input that passed both the format check
//! and the Luhn checksum. It lives for one session cycle.

use crate::bin::Bin;
use std::fmt;
use zeroize::Zeroize;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Number of leading digits that form the BIN.
pub const BIN_DIGITS: usize = 6;

/// A card number that passed the format and checksum checks.
///
/// The digits sit in a fixed-size array that is zeroed when the value is
/// dropped. `Debug` and `Display` only ever show the masked form.
#[derive(Clone)]
pub struct CardNumber {
    /// The card number as digits (0-9).
    digits: [u8; MAX_CARD_DIGITS],
    /// Number of actual digits in the card.
    digit_count: u8,
}

impl CardNumber {
    /// Internal constructor; use [`crate::validate`] to create instances.
    #[inline]
    pub(crate) fn new(digits: [u8; MAX_CARD_DIGITS], digit_count: u8) -> Self {
        Self {
            digits,
            digit_count,
        }
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the Bank Identification Number (first six digits).
    ///
    /// Always available: a validated card has at least 13 digits.
    #[inline]
    pub fn bin(&self) -> Bin {
        let value = self.digits[..BIN_DIGITS]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d as u32);
        Bin::from_validated(value)
    }

    /// Returns the last four digits as a string.
    #[inline]
    pub fn last_four(&self) -> String {
        let len = self.length();
        to_text(&self.digits[len - 4..len])
    }

    /// Returns the number masked to its last four digits: `****-****-****-0366`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(self)
    }

    /// Returns the number with BIN and last four visible: `453201******0366`.
    #[inline]
    pub fn masked_with_bin(&self) -> String {
        crate::mask::mask_with_bin(self)
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }
}

fn to_text(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
