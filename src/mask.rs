//! Masking helpers for displaying and logging card numbers.
//!
//! Only the first six digits (BIN) and the last four may ever be shown.
//! Full card numbers never reach logs or reports.

use crate::CardNumber;

/// Masks a card number showing only the last 4 digits.
///
/// ```
/// use cc_bincheck::validate;
///
/// let card = validate("4532015112830366").unwrap();
/// assert_eq!(card.masked(), "****-****-****-0366");
/// ```
#[inline]
pub fn mask_card(card: &CardNumber) -> String {
    group_masked(card.length(), &card.last_four())
}

/// Masks a card number showing the BIN and last 4 digits.
///
/// ```
/// use cc_bincheck::validate;
///
/// let card = validate("4532015112830366").unwrap();
/// assert_eq!(card.masked_with_bin(), "453201******0366");
/// ```
#[inline]
pub fn mask_with_bin(card: &CardNumber) -> String {
    let digits = card.digits();
    let len = digits.len();

    let mut result = String::with_capacity(len);
    for &d in &digits[..6] {
        result.push((b'0' + d) as char);
    }
    result.extend(std::iter::repeat('*').take(len - 10));
    for &d in &digits[len - 4..] {
        result.push((b'0' + d) as char);
    }

    result
}

/// Masks raw, unvalidated input for logging.
///
/// Digits are counted as-is; anything else is dropped. Inputs with four
/// or fewer digits are masked completely.
#[inline]
pub fn mask_string(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    group_masked(len, &digits[len - 4..])
}

fn group_masked(len: usize, last_four: &str) -> String {
    let masked_count = len.saturating_sub(4);
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count > 0 && masked_count % 4 == 0 {
        result.push('-');
    }

    result.push_str(last_four);
    result
}
