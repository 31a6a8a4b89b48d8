//! Input format check for raw card numbers.
//!
//! A well-formed card number is 13 to 19 characters long and made only of
//! ASCII digits. Separators such as spaces or hyphens are rejected, not
//! stripped. Length is checked before content.

use crate::card::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::ValidationError;

/// Checks that `input` is a well-formed card number.
///
/// # Errors
///
/// * [`ValidationError::TooShort`] / [`ValidationError::TooLong`] when the
///   character count is outside 13..=19.
/// * [`ValidationError::InvalidCharacter`] for the first non-digit.
///
/// # Example
///
/// ```
/// use cc_bincheck::format::check_format;
///
/// assert!(check_format("4532015112830366").is_ok());
/// assert!(check_format("4532-0151-1283-0366").is_err());
/// assert!(check_format("453201511283").is_err());
/// ```
pub fn check_format(input: &str) -> Result<(), ValidationError> {
    let length = input.chars().count();

    if length < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if length > MAX_CARD_DIGITS {
        return Err(ValidationError::TooLong {
            length,
            maximum: MAX_CARD_DIGITS,
        });
    }

    match input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(ValidationError::InvalidCharacter {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Returns true if `input` passes [`check_format`].
#[inline]
pub fn is_valid_format(input: &str) -> bool {
    check_format(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_lengths_in_range() {
        for len in MIN_CARD_DIGITS..=MAX_CARD_DIGITS {
            let input = "4".repeat(len);
            assert!(is_valid_format(&input), "length {} should pass", len);
        }
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            check_format("453201511283"),
            Err(ValidationError::TooShort {
                length: 12,
                minimum: 13
            })
        );
        assert_eq!(
            check_format(""),
            Err(ValidationError::TooShort {
                length: 0,
                minimum: 13
            })
        );
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            check_format("45320151128303660000"),
            Err(ValidationError::TooLong {
                length: 20,
                maximum: 19
            })
        );
    }

    #[test]
    fn test_invalid_character_position() {
        assert_eq!(
            check_format("4532015112830x66"),
            Err(ValidationError::InvalidCharacter {
                position: 13,
                character: 'x'
            })
        );
        assert_eq!(
            check_format("4532 0151 1283 0366"),
            Err(ValidationError::InvalidCharacter {
                position: 4,
                character: ' '
            })
        );
    }

    #[test]
    fn test_length_checked_before_content() {
        assert!(matches!(
            check_format("abc"),
            Err(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Fullwidth digits are Unicode digits but not ASCII
        let input = "４５３２０１５１１２８３０３６６";
        assert!(matches!(
            check_format(input),
            Err(ValidationError::InvalidCharacter { position: 0, .. })
        ));
    }
}
