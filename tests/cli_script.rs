use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn tracker_cmd(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("budget_tracker_cli").expect("binary exists");
    cmd.env("BUDGET_TRACKER_SCRIPT", "1")
        .env("BUDGET_TRACKER_FILE", data_file);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");

    let input = "1\nJob\n1000\n2\nFood\nGroceries\n150\n2\nFood\nDining\n50\n3\n4\n";
    tracker_cmd(&data_file)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("No saved data found. Starting fresh."))
        .stdout(contains("Income from Job of $1000.00 added successfully."))
        .stdout(contains("Expense of $150.00 for Groceries added to Food."))
        .stdout(contains("Total Income: $1000.00"))
        .stdout(contains("  - Food: $200.00"))
        .stdout(contains("Balance: $800.00"))
        .stdout(contains("  - Food: 100.00%"))
        .stdout(contains("Data saved to"))
        .stdout(contains("Goodbye!"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();
    assert_eq!(json["income"], 1000.0);
    assert_eq!(json["expenses"]["Food"][1]["description"], "Dining");
}

#[test]
fn saved_data_is_loaded_on_the_next_run() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");

    tracker_cmd(&data_file)
        .write_stdin("1\nJob\n1000\n2\nRent\nMay rent\n600\n4\n")
        .assert()
        .success();

    tracker_cmd(&data_file)
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(contains("Data loaded from"))
        .stdout(contains("Total Income: $1000.00"))
        .stdout(contains("  - Rent: $600.00"))
        .stdout(contains("Balance: $400.00"));
}

#[test]
fn invalid_income_amount_is_rejected_without_mutating_state() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");

    tracker_cmd(&data_file)
        .write_stdin("1\nX\n-5\n3\n4\n")
        .assert()
        .success()
        .stdout(contains("Error: Invalid amount"))
        .stdout(contains("Total Income: $0.00"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();
    assert_eq!(json["income"], 0.0);
}

#[test]
fn non_numeric_expense_amount_adds_no_record() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");

    tracker_cmd(&data_file)
        .write_stdin("2\nRent\nMay rent\nabc\n4\n")
        .assert()
        .success()
        .stdout(contains("Error: Invalid amount: `abc` is not a number"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();
    assert_eq!(json["expenses"], serde_json::json!({}));
}

#[test]
fn unknown_menu_option_reprompts() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");

    tracker_cmd(&data_file)
        .write_stdin("9\n4\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice. Please try again."))
        .stdout(contains("Goodbye!"));
}

#[test]
fn end_of_input_exits_without_saving() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");

    tracker_cmd(&data_file)
        .write_stdin("1\nJob\n1000\n")
        .assert()
        .success()
        .stdout(contains("Input ended. Exiting without saving."));

    assert!(!data_file.exists());
}

#[test]
fn unreadable_store_falls_back_to_a_fresh_ledger() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");
    std::fs::write(&data_file, "{ not json").unwrap();

    tracker_cmd(&data_file)
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(contains("Could not read saved data"))
        .stdout(contains("Total Income: $0.00"));
}

#[test]
fn tampered_store_values_are_reported_as_warnings() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("budget_data.json");
    std::fs::write(
        &data_file,
        r#"{"income": -3.0, "expenses": {}}"#,
    )
    .unwrap();

    tracker_cmd(&data_file)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(contains("Data loaded from"))
        .stdout(contains("stored income -3 is not a non-negative number"));
}
