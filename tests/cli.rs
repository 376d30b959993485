//! End-to-end tests for the `ledger` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_CLI_DATA_DIR", dir.path().join("ledger"))
        .env_remove("LEDGER_LOG");
    cmd
}

#[test]
fn add_then_balance() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "Salary", "2000", "--type", "income", "--category", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction"))
        .stdout(predicate::str::contains("Category:    Work"));

    ledger(&dir)
        .args(["add", "Rent", "750.50", "-t", "outcome", "-c", "Housing"])
        .assert()
        .success();

    ledger(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("$2000.00"))
        .stdout(predicate::str::contains("$750.50"))
        .stdout(predicate::str::contains("$1249.50"));
}

#[test]
fn outcome_over_balance_fails() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "Rent", "1000", "--type", "outcome", "--category", "Housing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient balance"));

    ledger(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found."));
}

#[test]
fn invalid_value_is_rejected() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "Lunch", "12.345", "--type", "outcome", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn import_then_list() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("import.csv");
    fs::write(
        &source,
        "title,type,value,category\n\
         Coffee,outcome,5,Food\n\
         Gift,income,50,Gifts\n\
         Bad Row,outcome,,Food\n",
    )
    .unwrap();

    ledger(&dir)
        .arg("import")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transaction(s)"));
    assert!(!source.exists());

    ledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Gifts"))
        .stdout(predicate::str::contains("Bad Row").not())
        .stdout(predicate::str::contains("$45.00"));
}

#[test]
fn import_keep_leaves_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("import.csv");
    fs::write(&source, "title,type,value,category\nGift,income,50,Gifts\n").unwrap();

    ledger(&dir)
        .arg("import")
        .arg(&source)
        .arg("--keep")
        .assert()
        .success();

    assert!(source.exists());
}

#[test]
fn import_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["import", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read import source"));
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["delete", "txn-00000000-0000-0000-0000-000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn delete_then_history() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "Salary", "10", "--type", "income", "--category", "Work"])
        .assert()
        .success();

    let output = ledger(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let short_id = stdout
        .split_whitespace()
        .find(|word| word.starts_with("txn-"))
        .unwrap()
        .to_string();

    ledger(&dir)
        .args(["delete", &short_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction: Salary"));

    ledger(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE Transaction"));
}

#[test]
fn config_writes_settings_file() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Serialize writes:      false"));

    assert!(dir.path().join("ledger").join("config.json").exists());
}
