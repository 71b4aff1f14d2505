//! Integration tests for the fintrack CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path())
        .env_remove("FINTRACK_LOG");
    cmd
}

fn add(data_dir: &TempDir, kind: &str, amount: &str, category: &str, description: &str, date: &str) -> String {
    let output = fintrack(data_dir)
        .args(["transaction", "add", kind, amount])
        .args(["-c", category, "-d", description, "--date", date])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .map(|id| id.trim().to_string())
        .unwrap()
}

#[test]
fn test_cli_help() {
    let data_dir = TempDir::new().unwrap();
    fintrack(&data_dir)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("savings-goal tracker"))
        .stdout(predicate::str::contains("Usage"));

    fintrack(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tracks progress toward savings goals"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_init_creates_data_files() {
    let data_dir = TempDir::new().unwrap();
    fintrack(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("transactions.json").exists());
    assert!(data_dir.path().join("data").join("goals.json").exists());
}

#[test]
fn test_add_and_filter_transactions() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "income", "3000", "Salary", "April salary", "2024-04-01");
    add(&data_dir, "expense", "45.50", "food", "Weekly groceries", "2024-04-03");
    add(&data_dir, "expense", "12", "Transport", "Metro card", "2024-03-28");

    fintrack(&data_dir)
        .args(["transaction", "list", "--type", "expense", "--month", "2024-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly groceries"))
        .stdout(predicate::str::contains("April salary").not())
        .stdout(predicate::str::contains("Metro card").not())
        .stdout(predicate::str::contains("Showing 1 transactions"));

    fintrack(&data_dir)
        .args(["transaction", "list", "--search", "METRO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro card"))
        .stdout(predicate::str::contains("Showing 1 transactions"));
}

#[test]
fn test_rejects_unknown_type() {
    let data_dir = TempDir::new().unwrap();
    fintrack(&data_dir)
        .args(["transaction", "add", "transfer", "10", "-c", "Other", "-d", "Moved money"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    fintrack(&data_dir)
        .args(["transaction", "list", "--type", "refund"])
        .assert()
        .failure();
}

#[test]
fn test_rejects_oversized_amount() {
    let data_dir = TempDir::new().unwrap();
    fintrack(&data_dir)
        .args(["transaction", "add", "income", "50000000000000000", "-c", "Salary", "-d", "Windfall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));

    add(&data_dir, "income", "1000000000000", "Salary", "Windfall", "2024-04-01");
    add(&data_dir, "income", "1000000000000", "Salary", "Windfall", "2024-04-02");
    fintrack(&data_dir)
        .args(["report", "dashboard", "--month", "2024-04", "--as-of", "2024-04-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard: April 2024"));
}

#[test]
fn test_show_and_delete_by_short_id() {
    let data_dir = TempDir::new().unwrap();
    let id = add(&data_dir, "expense", "20", "Entertainment", "Cinema", "2024-04-12");

    fintrack(&data_dir)
        .args(["transaction", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinema"));

    fintrack(&data_dir)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));

    fintrack(&data_dir)
        .args(["transaction", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    fintrack(&data_dir)
        .args(["transaction", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_dashboard_compares_with_previous_month() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "income", "2500", "Salary", "March salary", "2024-03-01");
    add(&data_dir, "expense", "500", "Bills", "March rent", "2024-03-02");
    add(&data_dir, "income", "3000", "Salary", "April salary", "2024-04-01");
    add(&data_dir, "expense", "600", "Bills", "April rent", "2024-04-02");

    fintrack(&data_dir)
        .args(["report", "dashboard", "--month", "2024-04", "--as-of", "2024-04-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard: April 2024"))
        .stdout(predicate::str::contains("▲ 20.0% vs last month"));

    // nothing recorded in February, so March has no baseline
    fintrack(&data_dir)
        .args(["report", "dashboard", "--month", "2024-03", "--as-of", "2024-04-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vs last month").not());
}

#[test]
fn test_goal_progress() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "income", "500", "Freelance", "Logo design", "2024-01-10");

    fintrack(&data_dir)
        .args(["goal", "add", "Laptop", "1000", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal: Laptop"));

    fintrack(&data_dir)
        .args(["goal", "list", "--as-of", "2024-02-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.0%"))
        .stdout(predicate::str::contains("1 goals: 0 completed, 1 on track, 0 overdue"));

    fintrack(&data_dir)
        .args(["goal", "list", "--as-of", "2024-04-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 on track, 1 overdue"));

    fintrack(&data_dir)
        .args(["goal", "edit", "laptop", "--amount", "400"])
        .assert()
        .success();

    fintrack(&data_dir)
        .args(["goal", "list", "--as-of", "2024-04-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 completed"));
}

#[test]
fn test_export_csv_with_filter() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "income", "3000", "Salary", "April salary", "2024-04-01");
    add(&data_dir, "expense", "45.50", "Food", "Groceries, market", "2024-04-03");

    let output = data_dir.path().join("expenses.csv");
    fintrack(&data_dir)
        .args(["export", "csv", "--type", "expense", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "Date,Type,Category,Description,Amount\n2024-04-03,expense,Food,\"Groceries, market\",45.50\n"
    );
}

#[test]
fn test_config_set_currency() {
    let data_dir = TempDir::new().unwrap();
    fintrack(&data_dir)
        .args(["config", "set-currency", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency set to USD"));

    fintrack(&data_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD"));

    fintrack(&data_dir)
        .args(["config", "set-currency", "XYZ"])
        .assert()
        .failure();
}

#[test]
fn test_audit_records_changes() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "expense", "8", "Food", "Coffee", "2024-04-05");

    fintrack(&data_dir)
        .args(["audit", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 1 entries"));
}

#[test]
fn test_init_twice() {
    let data_dir = TempDir::new().unwrap();
    fintrack(&data_dir).arg("init").assert().success();
    fintrack(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}
