//! E2E tests for the report, session and schema commands

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn booker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_booker"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn booker_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_booker"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}

/// Table output lists every item and the VAT-adjusted total
#[test]
fn report_table_from_csv() {
    let output = booker(&["report", "-i", "tests/data/groceries.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Bread"));
    assert!(stdout.contains("Washing up liquid"));
    assert!(stdout.contains("£2.82"));
    // 1.00 + 1.20 + 2.82
    assert!(stdout.contains("Total Price: £5.02"));
}

#[test]
fn report_json_from_json_input() {
    let output = booker(&["report", "-i", "tests/data/groceries.json", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(report["item_count"], 3);
    assert_eq!(report["total_gbp"], "5.02");
    assert_eq!(report["items"][1]["effective"], "£1.20");
    assert_eq!(
        report["export"],
        "Bread - £1.00\nMilk - £1.20\nWashing up liquid - £2.82"
    );
}

#[test]
fn report_export_only() {
    let output = booker(&["report", "-i", "tests/data/groceries.csv", "--export"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout,
        "Bread - £1.00\nMilk - £1.20\nWashing up liquid - £2.82\n"
    );
}

#[test]
fn report_csv_output() {
    let output = booker(&["report", "-i", "tests/data/groceries.csv", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.starts_with("position,name,price,vat,effective\n"));
    assert!(stdout.contains("2,Milk,£1.00,incl.,£1.20"));
}

#[test]
fn report_reads_stdin() {
    let output = booker_with_stdin(
        &["report", "-i", "-", "--export"],
        "name,price\nTea,2.00\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout, "Tea - £2.40\n");
}

/// A bad record fails the whole load and names the record
#[test]
fn report_rejects_invalid_record() {
    let output = booker(&["report", "-i", "tests/data/bad_price.csv"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("record 2"), "{stderr}");
    assert!(stderr.contains("not a number"), "{stderr}");
}

#[test]
fn session_from_piped_commands() {
    let output = booker_with_stdin(
        &["session", "--no-prompt"],
        "add 1.00 Bread --no-vat\nadd 1.00 Milk\nrm 1\nexport\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("2. Milk - £1.20 (incl. VAT)\nTotal Price: £2.20"));
    assert!(stdout.ends_with("Total Price: £1.20\nMilk - £1.20\n"));
}

#[test]
fn schema_csv_header() {
    let output = booker(&["schema", "csv-header"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout, "name,price,has_vat\n");
}

#[test]
fn schema_json() {
    let output = booker(&["schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let schema: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(schema["properties"]["items"].is_object());
}
