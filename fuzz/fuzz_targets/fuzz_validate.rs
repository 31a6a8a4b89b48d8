//! Fuzz target for card validation.
//!
//! Tests that validation and BIN extraction never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_bincheck::bin::BinTable;
use cc_bincheck::{extract_bin, is_valid, validate, Session};

fuzz_target!(|data: &str| {
    let _ = is_valid(data);
    let _ = extract_bin(data);

    if let Ok(card) = validate(data) {
        assert_eq!(Some(card.bin()), extract_bin(data), "BIN mismatch");
        assert!(!card.masked().contains(data), "masked output leaks number");
    }

    let table = BinTable::new();
    let _ = Session::new(&table).evaluate(data);
});
