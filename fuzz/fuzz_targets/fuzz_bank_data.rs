//! Fuzz target for the bank data loader.
//!
//! Loading is all-or-nothing: either every line becomes a record or the
//! load fails.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_bincheck::bin::BinTable;

fuzz_target!(|data: &str| {
    if let Ok(table) = BinTable::parse(data) {
        assert_eq!(table.len(), data.lines().count());
        for record in table.iter() {
            assert!(record.bin_from() <= record.bin_to());
            assert!(record.bin_to() <= 999_999);
        }
    }
});
