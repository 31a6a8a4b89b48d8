//! End-to-end tests for the `ccbincheck` binary.

use assert_cmd::Command;
use predicates::prelude::*;

const BANKS: &str = "tests/fixtures/banks.txt";

fn ccbincheck() -> Command {
    let mut cmd = Command::cargo_bin("ccbincheck").unwrap();
    cmd.env_remove("CCBINCHECK_BANKS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_session_valid_card_then_empty_line() {
    ccbincheck()
        .args(["--banks", BANKS])
        .write_stdin("4532015112830366\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the card validation program!"))
        .stdout(predicate::str::contains("Card number is valid"))
        .stdout(predicate::str::contains("Bank: Visa Test Bank"))
        .stdout(predicate::str::ends_with("Exiting program\n"));
}

#[test]
fn test_session_reports_every_outcome() {
    ccbincheck()
        .args(["--banks", BANKS, "session"])
        .write_stdin("abc\n4532015112830367\n378282246310005\n2200000000000004\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid format"))
        .stdout(predicate::str::contains("Card number fails checksum validation"))
        .stdout(predicate::str::contains("Issuer not identified"))
        .stdout(predicate::str::contains("Bank: Sberbank"));
}

#[test]
fn test_session_json_output() {
    ccbincheck()
        .args(["--banks", BANKS, "--output", "json"])
        .write_stdin("4532015112830366\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\":\"identified\""))
        .stdout(predicate::str::contains("\"bank\":\"Visa Test Bank\""))
        .stdout(predicate::str::contains("4532015112830366").not());
}

#[test]
fn test_bad_bank_data_aborts_startup() {
    ccbincheck()
        .args(["--banks", "tests/fixtures/bad_banks.txt"])
        .write_stdin("4532015112830366\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: expected 3 fields, found 2"))
        .stdout(predicate::str::contains("Card number").not());
}

#[test]
fn test_missing_bank_data_aborts_startup() {
    ccbincheck()
        .args(["--banks", "tests/fixtures/does_not_exist.txt"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading bank data"));
}

#[test]
fn test_banks_from_env() {
    ccbincheck()
        .env("CCBINCHECK_BANKS", BANKS)
        .args(["check", "4532015112830366"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank: Visa Test Bank"));
}

#[test]
fn test_check_invalid_exits_nonzero() {
    ccbincheck()
        .args(["--banks", BANKS, "check", "4532015112830367"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Card number fails checksum validation"));
}

#[test]
fn test_luhn_subcommand() {
    ccbincheck()
        .args(["luhn", "4532015112830366"])
        .assert()
        .success()
        .stdout("Luhn check: PASS\n");

    ccbincheck()
        .args(["luhn", "4532015112830367"])
        .assert()
        .failure()
        .stdout("Luhn check: FAIL\n");
}

#[test]
fn test_lookup_subcommand() {
    ccbincheck()
        .args(["--banks", BANKS, "lookup", "220050"])
        .assert()
        .success()
        .stdout("BIN 220050: Sberbank\n");

    ccbincheck()
        .args(["--banks", BANKS, "lookup", "999999"])
        .assert()
        .failure()
        .stdout("BIN 999999: Issuer not identified\n");
}
