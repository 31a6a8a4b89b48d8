//! Integration tests for cc_bincheck.
//!
//! These drive the public API end to end: bank data loading, the
//! validation pipeline and full scripted sessions.

use cc_bincheck::bin::{BankRecord, Bin, BinDatabase, BinTable, Issuer};
use cc_bincheck::input::{ReaderSource, ScriptedLines};
use cc_bincheck::report::{Report, TextReporter};
use cc_bincheck::{
    extract_bin, is_valid, luhn, validate, LoadError, Session, SessionSummary, ValidationError,
};
use std::io::{Cursor, Write};

// =============================================================================
// FIXTURES
// =============================================================================

mod cards {
    pub const VISA: &str = "4532015112830366";
    pub const VISA_BAD_CHECKSUM: &str = "4532015112830367";
    pub const VISA_13: &str = "4222222222222";
    pub const MASTERCARD: &str = "5500000000000004";
    pub const AMEX: &str = "378282246310005";
    pub const MIR: &str = "2200000000000004";
}

const BANKS: &str = "\
Sberbank, 220000, 220099
Visa Test Bank, 400000, 499999
Mastercard Test Bank, 510000, 559999
Narrow Visa, 453200, 453299
";

fn bank_table() -> BinTable {
    BinTable::parse(BANKS).unwrap()
}

fn visa_only() -> BinTable {
    BinTable::from_records(vec![BankRecord::new("Visa", 400000, 499999).unwrap()])
}

fn run_text(table: &BinTable, lines: &[&str]) -> (SessionSummary, String) {
    let mut input = ScriptedLines::new(lines.iter().copied());
    let mut reporter = TextReporter::new(Vec::new());
    let summary = Session::new(table).run(&mut input, &mut reporter).unwrap();
    (summary, String::from_utf8(reporter.into_inner()).unwrap())
}

// =============================================================================
// FORMAT + LUHN
// =============================================================================

#[test]
fn test_known_luhn_vectors() {
    assert!(luhn::validate_str(cards::VISA));
    assert!(!luhn::validate_str(cards::VISA_BAD_CHECKSUM));
}

#[test]
fn test_all_fixture_cards_valid() {
    for card in [
        cards::VISA,
        cards::VISA_13,
        cards::MASTERCARD,
        cards::AMEX,
        cards::MIR,
    ] {
        assert!(is_valid(card), "{} should be valid", card);
    }
}

#[test]
fn test_format_rejections_never_reach_checksum() {
    let cases = [
        "",
        "123456789012",
        "45320151128303661234",
        "4532 0151 1283 0366",
        "4532-0151-1283-0366",
        "453201511283036a",
        "\t4532015112830366",
    ];

    for case in cases {
        let err = validate(case).unwrap_err();
        assert!(err.is_format_error(), "{:?} should be a format error", case);
    }
}

#[test]
fn test_checksum_rejection() {
    assert_eq!(
        validate(cards::VISA_BAD_CHECKSUM).unwrap_err(),
        ValidationError::InvalidChecksum
    );
}

#[test]
fn test_bin_extraction() {
    assert_eq!(extract_bin("453201999999999"), Bin::new(453201));
    assert_eq!(extract_bin("453201"), Bin::new(453201));
    assert_eq!(extract_bin("45320"), None);
}

// =============================================================================
// BANK TABLE
// =============================================================================

#[test]
fn test_table_lookup() {
    let table = visa_only();
    assert_eq!(table.lookup(Bin::new(453201).unwrap()), Issuer::Known("Visa"));
    assert_eq!(table.lookup(Bin::new(999999).unwrap()), Issuer::Unknown);
}

#[test]
fn test_overlap_earliest_record_wins() {
    let table = bank_table();
    // 453201 is in both "Visa Test Bank" and the later "Narrow Visa"
    assert_eq!(
        table.lookup(Bin::new(453201).unwrap()),
        Issuer::Known("Visa Test Bank")
    );
    assert!(!table.overlapping_pairs().is_empty());
}

#[test]
fn test_load_two_or_four_fields_fails() {
    for bad in ["Visa,400000", "Visa,400000,499999,extra"] {
        let data = format!("Good Bank,100000,199999\n{}\n", bad);
        match BinTable::parse(&data) {
            Err(LoadError::FieldCount { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected FieldCount error, got {:?}", other),
        }
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BANKS.as_bytes()).unwrap();

    let table = BinTable::from_file(file.path()).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.records()[0].name(), "Sberbank");
}

#[test]
fn test_load_error_from_file_names_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Good Bank, 100000, 199999").unwrap();
    writeln!(file, "Bad Bank, 2000x0, 299999").unwrap();

    let err = BinTable::from_file(file.path()).unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().contains("2000x0"));
}

// =============================================================================
// SESSIONS
// =============================================================================

#[test]
fn test_end_to_end_single_valid_card() {
    let table = visa_only();
    let mut input = ScriptedLines::new([cards::VISA, ""]);
    let mut reports: Vec<Report> = Vec::new();

    let summary = Session::new(&table).run(&mut input, &mut reports).unwrap();

    assert_eq!(summary.total(), 1);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].bank(), Some("Visa"));
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_end_to_end_text_output() {
    let (summary, out) = run_text(&visa_only(), &[cards::VISA, ""]);
    assert_eq!(summary.identified, 1);
    assert_eq!(
        out,
        "Welcome to the card validation program!\n\
         Enter card number: Card number is valid\n\
         Bank: Visa\n\
         Enter card number: Exiting program\n"
    );
}

#[test]
fn test_session_all_outcomes() {
    let (summary, out) = run_text(
        &bank_table(),
        &[
            "hello",
            cards::VISA_BAD_CHECKSUM,
            cards::MIR,
            cards::AMEX,
            cards::VISA,
        ],
    );

    assert_eq!(summary.format_rejected, 1);
    assert_eq!(summary.checksum_rejected, 1);
    assert_eq!(summary.identified, 2);
    assert_eq!(summary.unknown_issuer, 1);

    assert!(out.contains("Invalid format"));
    assert!(out.contains("Card number fails checksum validation"));
    assert!(out.contains("Bank: Sberbank"));
    assert!(out.contains("Issuer not identified"));
    assert!(out.contains("Bank: Visa Test Bank"));
    // Terminated by end of input
    assert!(out.ends_with("Exiting program\n"));
}

#[test]
fn test_session_from_reader_source() {
    let table = visa_only();
    let mut source = ReaderSource::new(Cursor::new(format!("{}\n\n", cards::VISA)));
    let mut reports: Vec<Report> = Vec::new();

    let summary = Session::new(&table).run(&mut source, &mut reports).unwrap();
    assert_eq!(summary.identified, 1);
}

#[test]
fn test_session_survives_invalid_utf8_line() {
    let table = visa_only();
    let mut data = b"\xff\xfe1234567890123\n".to_vec();
    data.extend_from_slice(format!("{}\n\n", cards::VISA).as_bytes());
    let mut source = ReaderSource::new(Cursor::new(data));
    let mut reports: Vec<Report> = Vec::new();

    let summary = Session::new(&table).run(&mut source, &mut reports).unwrap();

    assert_eq!(summary.format_rejected, 1);
    assert_eq!(summary.identified, 1);
    assert!(matches!(
        reports[0],
        Report::FormatRejected {
            reason: ValidationError::InvalidCharacter { position: 0, .. }
        }
    ));
    assert_eq!(reports[1].bank(), Some("Visa"));
}

#[test]
fn test_reports_never_contain_full_number() {
    let table = bank_table();
    let session = Session::new(&table);
    for card in [cards::VISA, cards::VISA_BAD_CHECKSUM, cards::MASTERCARD] {
        let report = session.evaluate(card);
        assert!(!format!("{:?}", report).contains(card));
    }
}

#[test]
fn test_empty_table_reports_unknown_issuer() {
    let table = BinTable::new();
    assert!(BinDatabase::is_empty(&table));

    let (summary, _) = run_text(&table, &[cards::VISA]);
    assert_eq!(summary.unknown_issuer, 1);
}

#[test]
fn test_custom_database() {
    struct Everything;
    impl BinDatabase for Everything {
        fn lookup(&self, _bin: Bin) -> Issuer<'_> {
            Issuer::Known("Catch-all Bank")
        }
        fn len(&self) -> usize {
            1
        }
    }

    let report = Session::new(&Everything).evaluate(cards::AMEX);
    assert_eq!(report.bank(), Some("Catch-all Bank"));
}
