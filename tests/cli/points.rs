use crate::cli::support::{depot, init_layout, stdout_json, write_layout};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Points command tests
// ============================================================================

#[test]
fn test_points_lists_sorted_with_degree() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .arg("points")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate (0, 0) edges=2"))
        .stdout(predicate::str::contains("Pillar (2, 1) edges=0 [obstacle]"))
        .stdout(predicate::str::is_match(r"(?s)A1 .*B1 .*C1 .*Gate .*Pillar .*Shelf ").unwrap());
}

#[test]
fn test_points_empty_layout() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), "version = 1\n");

    depot()
        .current_dir(dir.path())
        .arg("points")
        .assert()
        .success()
        .stdout(predicate::str::contains("No points in layout"));
}

#[test]
fn test_points_json_output() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    let output = depot()
        .current_dir(dir.path())
        .args(["--format", "json", "points"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 6);
    assert_eq!(points[0]["id"], "A1");

    let pillar = points.iter().find(|p| p["id"] == "Pillar").unwrap();
    assert_eq!(pillar["is_obstacle"], true);
    assert_eq!(pillar["degree"], 0);
}

#[test]
fn test_points_records_output() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .args(["--format", "records", "points"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=points points=6 edges=5"))
        .stdout(predicate::str::contains("P Shelf x=3 y=0 obstacle=false degree=2"));
}
