//! Card validation pipeline: format check, then Luhn checksum.
//!
//! Also hosts BIN extraction for raw strings, which the session uses only
//! after validation but which is defined for any input.

use crate::bin::Bin;
use crate::card::{CardNumber, BIN_DIGITS, MAX_CARD_DIGITS};
use crate::error::ValidationError;
use crate::format::check_format;
use crate::luhn;

/// Validates a card number string.
///
/// Runs the format check first; the checksum is only computed for input
/// that is 13 to 19 ASCII digits.
///
/// # Example
///
/// ```
/// use cc_bincheck::{validate, ValidationError};
///
/// let card = validate("4532015112830366").unwrap();
/// assert_eq!(card.bin().value(), 453201);
///
/// assert_eq!(
///     validate("4532015112830367").unwrap_err(),
///     ValidationError::InvalidChecksum
/// );
/// ```
pub fn validate(input: &str) -> Result<CardNumber, ValidationError> {
    check_format(input)?;

    // Format check guarantees 13..=19 ASCII digits
    let mut digits = [0u8; MAX_CARD_DIGITS];
    let count = input.len();
    for (slot, b) in digits.iter_mut().zip(input.bytes()) {
        *slot = b - b'0';
    }

    if !luhn::validate(&digits[..count]) {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(CardNumber::new(digits, count as u8))
}

/// Quickly checks if a card number is valid.
///
/// ```
/// use cc_bincheck::is_valid;
///
/// assert!(is_valid("4532015112830366"));
/// assert!(!is_valid("4532-0151-1283-0366"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Checks the Luhn checksum only, without the length rule.
///
/// Returns false for input containing anything but ASCII digits.
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    luhn::validate_str(input)
}

/// Extracts the BIN from the first six characters of `input`.
///
/// Returns `None` when fewer than six characters are available or any of
/// the first six is not an ASCII digit. Callers treat `None` as "cannot
/// identify bank".
///
/// ```
/// use cc_bincheck::extract_bin;
///
/// assert_eq!(extract_bin("4532015112830366").map(|b| b.value()), Some(453201));
/// assert_eq!(extract_bin("4532"), None);
/// ```
pub fn extract_bin(input: &str) -> Option<Bin> {
    let prefix = input.as_bytes().get(..BIN_DIGITS)?;
    if !prefix.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let value = prefix
        .iter()
        .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
    Bin::new(value)
}
