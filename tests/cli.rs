use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn stockreg(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockreg").unwrap();
    cmd.env("STOCKREG_DATA_DIR", data_dir);
    cmd
}

#[test]
fn test_add_edit_show_delete_cycle() {
    let dir = tempfile::tempdir().unwrap();

    stockreg(dir.path())
        .args(["add", "--month", "2024-03", "--day", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added row 1 (2024-03-05)"));

    stockreg(dir.path())
        .args(["edit", "1", "item", "Product A"])
        .assert()
        .success();
    stockreg(dir.path())
        .args(["edit", "1", "opening", "100"])
        .assert()
        .success();
    stockreg(dir.path())
        .args(["edit", "1", "purchase", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total 150.00 closing 150.00"));

    stockreg(dir.path())
        .args(["show", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product A"))
        .stdout(predicate::str::contains("150.00"));

    stockreg(dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted row 1"));

    stockreg(dir.path())
        .args(["show", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no rows for this period)"));
}

#[test]
fn test_manual_override_survives_later_edits() {
    let dir = tempfile::tempdir().unwrap();

    stockreg(dir.path())
        .args(["add", "--month", "2024-03", "--day", "1"])
        .assert()
        .success();
    stockreg(dir.path())
        .args(["edit", "1", "total", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manual override active"));
    stockreg(dir.path())
        .args(["edit", "1", "opening", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total 500.00"));
}

#[test]
fn test_edit_rejects_non_numeric_input() {
    let dir = tempfile::tempdir().unwrap();

    stockreg(dir.path())
        .args(["add", "--month", "2024-03"])
        .assert()
        .success();
    stockreg(dir.path())
        .args(["edit", "1", "opening", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("field unchanged"));
}

#[test]
fn test_edit_missing_row_is_noop() {
    let dir = tempfile::tempdir().unwrap();

    stockreg(dir.path())
        .args(["edit", "42", "sales", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No row with id 42"));
}

#[test]
fn test_export_row_layout() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");

    stockreg(dir.path())
        .args(["add", "--month", "2024-03", "--day", "5"])
        .assert()
        .success();
    stockreg(dir.path())
        .args(["edit", "1", "item", "Widget, Large"])
        .assert()
        .success();

    stockreg(dir.path())
        .args(["export", "--month", "2024-03", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 rows"));

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF], "missing UTF-8 BOM");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(text.starts_with("Date,Item,Opening Stock"));
    assert!(text.contains("\"Widget, Large\""));
}

#[test]
fn test_export_matrix_layout() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("matrix.csv");

    stockreg(dir.path())
        .args(["add", "--month", "2024-03", "--day", "1"])
        .assert()
        .success();
    stockreg(dir.path())
        .args(["edit", "1", "item", "Product A"])
        .assert()
        .success();

    stockreg(dir.path())
        .args([
            "export",
            "--month",
            "2024-03",
            "--layout",
            "matrix",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Day,Product A"));
    assert!(text.contains("Opening Stock,Purchase,Total Quantity,Sales,Price,Closing Stock"));
    // 2 header rows + 31 days for March.
    assert_eq!(text.lines().count(), 33);
}

#[test]
fn test_print_omits_id_column() {
    let dir = tempfile::tempdir().unwrap();

    stockreg(dir.path())
        .args(["add", "--month", "2024-03"])
        .assert()
        .success();

    stockreg(dir.path())
        .args(["print", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stock Register — March 2024"))
        .stdout(predicate::str::contains("ID").not());
}

#[test]
fn test_reinit_keeps_configured_data_dir() {
    let home = tempfile::tempdir().unwrap();
    let custom = home.path().join("custom-data");

    let mut cmd = Command::cargo_bin("stockreg").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("STOCKREG_DATA_DIR")
        .args(["init", "--data-dir", custom.to_str().unwrap()])
        .assert()
        .success();

    // A bare re-run (e.g. to set the shop name) must not reset the data dir.
    let mut cmd = Command::cargo_bin("stockreg").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("STOCKREG_DATA_DIR")
        .args(["init", "--shop-name", "Corner Store"])
        .assert()
        .success();

    let settings_path = home.path().join(".config/stockreg/settings.json");
    let settings = std::fs::read_to_string(settings_path).unwrap();
    assert!(
        settings.contains("custom-data"),
        "data_dir was reset: {settings}"
    );
}

#[test]
fn test_status_before_init() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("nothing-here");

    stockreg(&empty)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database not found"));
}
