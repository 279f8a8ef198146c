use crate::cli::support::{depot, init_layout, stdout_json, write_layout};
use predicates::prelude::*;
use tempfile::tempdir;

const DUPLICATE_ITEMS: &str = r#"
[[items]]
id = "B7"
name = "Crate"
category = "Bulk"
weight = 12.0

[[items]]
id = "A2"
name = "Tape"
weight = 0.1

[[items]]
id = "B7"
name = "Second crate"
category = "Bulk"
weight = 11.0
"#;

// ============================================================================
// Simulate command tests
// ============================================================================

#[test]
fn test_simulate_shelves_in_id_order() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .arg("simulate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Received 3 package(s)"))
        .stdout(predicate::str::contains("Belt (0):"))
        .stdout(predicate::str::contains("Shelf (3):"))
        .stdout(predicate::str::is_match(r"(?s)\[P1\].*\[P2\].*\[P3\] Ladder").unwrap());
}

#[test]
fn test_simulate_reports_fifo_processing_order() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .arg("simulate")
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"(?s)Filed: \[P3\].*Filed: \[P1\].*Filed: \[P2\]").unwrap(),
        );
}

#[test]
fn test_simulate_partial_leaves_belt() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .args(["simulate", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filed: [P3] Ladder (Tools) - 7.50kg"))
        .stdout(predicate::str::contains("Belt (2):"))
        .stdout(predicate::str::contains("Shelf (1):"));
}

#[test]
fn test_simulate_zero_processes_nothing() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    let output = depot()
        .current_dir(dir.path())
        .args(["--format", "json", "simulate", "--process", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["processed"], serde_json::json!([]));
    assert_eq!(json["belt"].as_array().unwrap().len(), 3);
    assert_eq!(json["shelf"], serde_json::json!([]));
}

#[test]
fn test_simulate_drops_duplicate_ids() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), DUPLICATE_ITEMS);

    depot()
        .current_dir(dir.path())
        .arg("simulate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped duplicate: [B7] Second crate"))
        .stdout(predicate::str::contains("Shelf (2):"));
}

#[test]
fn test_simulate_json_output() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), DUPLICATE_ITEMS);

    let output = depot()
        .current_dir(dir.path())
        .args(["--format", "json", "simulate"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["received"], 3);

    let processed = json["processed"].as_array().unwrap();
    assert_eq!(processed.len(), 3);
    assert_eq!(processed[0]["id"], "B7");
    assert_eq!(processed[0]["status"], "filed");
    assert_eq!(processed[2]["status"], "duplicate");

    let shelf = json["shelf"].as_array().unwrap();
    assert_eq!(shelf.len(), 2);
    assert_eq!(shelf[0]["id"], "A2");
    assert_eq!(shelf[0]["category"], "General");
    assert_eq!(shelf[1]["name"], "Crate");
}

#[test]
fn test_simulate_generates_missing_ids() {
    let dir = tempdir().unwrap();
    write_layout(
        dir.path(),
        r#"
[[items]]
name = "Unlabelled box"
weight = 1.0
"#,
    );

    let output = depot()
        .current_dir(dir.path())
        .args(["--format", "json", "simulate"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let id = json["shelf"][0]["id"].as_str().unwrap();
    assert!(id.starts_with("ORD-"), "unexpected id {id}");
}

#[test]
fn test_simulate_records_output() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), DUPLICATE_ITEMS);

    depot()
        .current_dir(dir.path())
        .args(["--format", "records", "simulate"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H depot=1 records=1"))
        .stdout(predicate::str::contains("mode=simulate processed=3 belt=0 shelf=2"))
        .stdout(predicate::str::contains("D filed B7"))
        .stdout(predicate::str::contains("D duplicate B7"))
        .stdout(predicate::str::contains("I A2 \"Tape\" category=\"General\" weight=0.10"));
}

#[test]
fn test_simulate_empty_layout() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), "version = 1\n");

    depot()
        .current_dir(dir.path())
        .arg("simulate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Received 0 package(s)"))
        .stdout(predicate::str::contains("Belt is empty."))
        .stdout(predicate::str::contains("Shelf (0):"));
}
