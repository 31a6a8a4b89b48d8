//! Luhn checksum ("modulus 10") for card numbers.
//!
//! The functions here work on digit values (0-9), not ASCII bytes.
//! [`validate_str`] is the entry point for text that already passed the
//! format check.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a sequence of digits using the Luhn algorithm.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit; the check digit itself is never doubled
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cc_bincheck::luhn::validate;
///
/// let digits = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];
/// assert!(validate(&digits));
///
/// let invalid = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 7];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Validates an ASCII digit string using the Luhn algorithm.
///
/// Returns false if the string is empty or holds anything but `0`-`9`.
///
/// ```
/// use cc_bincheck::luhn::validate_str;
///
/// assert!(validate_str("4532015112830366"));
/// assert!(!validate_str("4532015112830367"));
/// assert!(!validate_str("4532-0151"));
/// ```
pub fn validate_str(number: &str) -> bool {
    let bytes = number.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut sum: u32 = 0;
    for (i, &b) in bytes.iter().rev().enumerate() {
        let digit = b - b'0';
        sum += if i % 2 == 1 {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
    }

    sum % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            // Position 0 from the right is the check digit, never doubled
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it pass Luhn.
///
/// ```
/// use cc_bincheck::luhn::generate_check_digit;
///
/// let partial = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6];
/// assert_eq!(generate_check_digit(&partial), 6);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one place left once the check digit is
    // appended, so the rightmost one here lands on a doubled position.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
