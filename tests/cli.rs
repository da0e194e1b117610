//! End-to-end tests for the non-interactive commands.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with HOME pointed at a scratch directory, so settings and logs
/// never touch the real home.
fn warung(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("warung").expect("binary not found");
    cmd.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_seed(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("record.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    warung(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("invoices"));
}

#[test]
fn invoices_prints_static_counters_and_list() {
    let home = TempDir::new().unwrap();
    warung(home.path())
        .arg("invoices")
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft: 3   Sent: 7   Paid: 12"))
        .stdout(predicate::str::contains("INV-001"))
        .stdout(predicate::str::contains("PT. ABC Indonesia"))
        .stdout(predicate::str::contains("Rp 5.000.000"))
        .stdout(predicate::str::contains("Toko Serbaguna"));
}

#[test]
fn summary_computes_profit_margin_and_growth() {
    let home = TempDir::new().unwrap();
    let seed = write_seed(
        &home,
        r#"{
            "revenue_month4": "12000000",
            "revenue_month5": "15000000",
            "expense_month5": "12000000",
            "cash_balance": "5200000",
            "employees": "4"
        }"#,
    );
    warung(home.path())
        .args(["summary", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp 15.000.000"))
        .stdout(predicate::str::contains("Rp 3.000.000"))
        .stdout(predicate::str::contains("20.0%"))
        .stdout(predicate::str::contains("+25.0%"))
        .stdout(predicate::str::contains("Required fields").not());
}

#[test]
fn summary_sanitizes_seed_values() {
    let home = TempDir::new().unwrap();
    let seed = write_seed(
        &home,
        r#"{"revenue_month5": "Rp 1.000.000", "expense_month5": "250,000", "cash_balance": "1"}"#,
    );
    warung(home.path())
        .args(["summary", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp 750.000"))
        .stdout(predicate::str::contains("75.0%"));
}

#[test]
fn summary_warns_when_required_fields_missing() {
    let home = TempDir::new().unwrap();
    let seed = write_seed(&home, r#"{"revenue_month5": "1000"}"#);
    warung(home.path())
        .args(["summary", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Required fields"));
}

#[test]
fn summary_fails_on_missing_seed() {
    let home = TempDir::new().unwrap();
    warung(home.path())
        .args(["summary", "--seed"])
        .arg(home.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot read seed"));
}

#[test]
fn summary_fails_on_bad_json() {
    let home = TempDir::new().unwrap();
    let seed = write_seed(&home, "[1, 2");
    warung(home.path())
        .args(["summary", "--seed"])
        .arg(&seed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: JSON error"));
}

#[test]
fn samples_lists_transactions_for_accepted_file() {
    let home = TempDir::new().unwrap();
    let statement = home.path().join("mutasi-november.CSV");
    std::fs::write(&statement, "anything at all").unwrap();
    warung(home.path())
        .args(["samples", "--file"])
        .arg(&statement)
        .assert()
        .success()
        .stdout(predicate::str::contains("mutasi-november.CSV"))
        .stdout(predicate::str::contains("Product A sales"))
        .stdout(predicate::str::contains("+Rp 150.000"))
        .stdout(predicate::str::contains("Transfer to supplier"))
        .stdout(predicate::str::contains("Needs review"));
}

#[test]
fn samples_rejects_unknown_extension() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.txt");
    std::fs::write(&notes, "x").unwrap();
    warung(home.path())
        .args(["samples", "--file"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("File not accepted"))
        .stdout(predicate::str::contains("Product A sales").not());
}

#[test]
fn status_without_settings_shows_defaults() {
    let home = TempDir::new().unwrap();
    warung(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains("(defaults)"))
        .stdout(predicate::str::contains("warung.log"))
        .stdout(predicate::str::contains("(not created yet)"));

    assert!(!home.path().join("Documents/warung/logs").exists());
}

#[test]
fn status_reports_log_written_by_other_commands() {
    let home = TempDir::new().unwrap();
    warung(home.path()).arg("invoices").assert().success();
    warung(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not created yet)").not());
}

#[test]
fn init_then_status_reflects_settings() {
    let home = TempDir::new().unwrap();
    let data_dir = home.path().join("books");
    warung(home.path())
        .args(["init", "--user-name", "Siti Rahma", "--log-level", "debug", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings"));

    assert!(home.path().join(".config/warung/settings.json").exists());
    assert!(data_dir.join("logs").is_dir());

    warung(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Siti Rahma"))
        .stdout(predicate::str::contains("debug"))
        .stdout(predicate::str::contains("(defaults)").not());
}

#[test]
fn commands_write_to_log_file() {
    let home = TempDir::new().unwrap();
    let statement = home.path().join("bank.pdf");
    std::fs::write(&statement, "%PDF").unwrap();
    warung(home.path())
        .args(["samples", "--file"])
        .arg(&statement)
        .assert()
        .success();

    let log = home.path().join("Documents/warung/logs/warung.log");
    let content = std::fs::read_to_string(log).unwrap();
    assert!(content.contains("statement selected"));
}
