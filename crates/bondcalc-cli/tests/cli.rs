//! Integration tests for the `bondcalc` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn bondcalc() -> Command {
    let mut cmd = Command::cargo_bin("bondcalc").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("BONDCALC_CONFIG");
    cmd
}

// =============================================================================
// FORMULA COMMANDS
// =============================================================================

#[test]
fn pv_zero_minimal() {
    bondcalc()
        .args(["--format", "minimal", "pv-zero"])
        .args(["--face", "1000", "--periods", "10", "--yield", "0.05"])
        .assert()
        .success()
        .stdout("613.91325\n");
}

#[test]
fn ytm_zero_minimal() {
    bondcalc()
        .args(["-f", "minimal", "ytm-zero"])
        .args(["--price", "613.913", "--face", "1000", "--periods", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.05"));
}

#[test]
fn ytm_coupon_minimal() {
    bondcalc()
        .args(["--format", "minimal", "ytm-coupon"])
        .args(["--price", "950", "--face", "1000", "--coupon", "50", "--periods", "10"])
        .assert()
        .success()
        .stdout("0.056687176\n");
}

#[test]
fn ytm_coupon_json() {
    bondcalc()
        .args(["--format", "json", "ytm-coupon"])
        .args(["--price", "950", "--face", "1000", "--coupon", "50", "--periods", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"formula\": \"ytm-coupon\""))
        .stdout(predicate::str::contains("\"percent_display\": \"5.6687176%\""))
        .stdout(predicate::str::contains("\"converged\": true"));
}

#[test]
fn pv_coupon_table() {
    bondcalc()
        .args(["pv-coupon", "--coupon", "50", "--face", "1000"])
        .args(["--periods", "10", "--yield", "0.05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PV Coupon Bond"))
        .stdout(predicate::str::contains("1000"));
}

#[test]
fn pv_zero_csv() {
    bondcalc()
        .args(["--format", "csv", "pv-zero"])
        .args(["--face", "1000", "--periods", "10", "--yield", "0.05"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key,value\n"))
        .stdout(predicate::str::contains("P (price),613.91325"));
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn pv_coupon_zero_yield_fails() {
    bondcalc()
        .args(["pv-coupon", "--coupon", "50", "--face", "1000"])
        .args(["--periods", "10", "--yield", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-finite"));
}

#[test]
fn ytm_coupon_without_sign_change_fails() {
    bondcalc()
        .args(["ytm-coupon", "--price", "5000", "--face", "1000"])
        .args(["--coupon", "50", "--periods", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same sign"));
}

#[test]
fn missing_field_is_a_usage_error() {
    bondcalc()
        .args(["pv-zero", "--face", "1000", "--periods", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yield"));
}

// =============================================================================
// FIELD PARSING
// =============================================================================

#[test]
fn unreadable_text_reads_as_zero() {
    // "abc" reads as y = 0, which PV coupon rejects
    bondcalc()
        .args(["pv-coupon", "--coupon", "50", "--face", "1000"])
        .args(["--periods", "10", "--yield", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("y = 0"));
}

#[test]
fn trailing_text_is_ignored() {
    bondcalc()
        .args(["-f", "minimal", "pv-zero"])
        .args(["--face", "1000 dollars", "--periods", "10yrs", "--yield", "0.05"])
        .assert()
        .success()
        .stdout("613.91325\n");
}

#[test]
fn strict_mode_rejects_unreadable_text() {
    bondcalc()
        .args(["--strict", "pv-zero"])
        .args(["--face", "1000 dollars", "--periods", "10", "--yield", "0.05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read FV"));
}

#[test]
fn negative_values_are_accepted_as_field_text() {
    bondcalc()
        .args(["pv-zero", "--face", "1000", "--periods", "10", "--yield", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 + y must be positive"));
}

#[test]
fn ytm_coupon_rejects_unreadable_periods() {
    // "abc" reads as N = 0, which leaves the residual flat at P = FV
    bondcalc()
        .args(["ytm-coupon", "--price", "1000", "--face", "1000"])
        .args(["--coupon", "50", "--periods", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("number of periods must be non-zero"));
}

#[test]
fn ytm_coupon_overflowing_face_is_non_finite() {
    bondcalc()
        .args(["ytm-coupon", "--price", "950", "--face", "1e999"])
        .args(["--coupon", "50", "--periods", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-finite result"));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn config_file_limits_iterations() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "max_iterations = 5").unwrap();

    bondcalc()
        .args(["--format", "json", "--config"])
        .arg(file.path())
        .args(["ytm-coupon", "--price", "950", "--face", "1000"])
        .args(["--coupon", "50", "--periods", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"converged\": false"))
        .stdout(predicate::str::contains("\"iterations\": 5"))
        .stderr(predicate::str::contains("approximate"));
}

#[test]
fn config_file_sets_display_digits() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"display_digits": 4}}"#).unwrap();

    bondcalc()
        .env("BONDCALC_CONFIG", file.path())
        .args(["-f", "minimal", "pv-zero"])
        .args(["--face", "1000", "--periods", "10", "--yield", "0.05"])
        .assert()
        .success()
        .stdout("613.9\n");
}

#[test]
fn invalid_config_file_fails() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "yield_lower_bound = 0.0").unwrap();

    bondcalc()
        .arg("--config")
        .arg(file.path())
        .arg("formulas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("yield_lower_bound"));
}

// =============================================================================
// LISTING
// =============================================================================

#[test]
fn formulas_lists_all_commands() {
    bondcalc()
        .args(["--format", "minimal", "formulas"])
        .assert()
        .success()
        .stdout("pv-coupon\nytm-zero\nytm-coupon\npv-zero\n");
}

#[test]
fn formulas_json() {
    bondcalc()
        .args(["--format", "json", "formulas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"expression\": \"P = FV/(1+y)^N\""));
}
