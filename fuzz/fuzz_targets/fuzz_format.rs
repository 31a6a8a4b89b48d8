//! Fuzz target for the input format check.
//!
//! Acceptance must match the definition: 13-19 ASCII digits.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_bincheck::format::is_valid_format;

fuzz_target!(|data: &str| {
    let expected = (13..=19).contains(&data.chars().count())
        && data.chars().all(|c| c.is_ascii_digit());
    assert_eq!(is_valid_format(data), expected);
});
