use crate::cli::support::depot;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_writes_layout() {
    let dir = tempdir().unwrap();

    depot()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote starter layout"));

    let content = std::fs::read_to_string(dir.path().join("depot.toml")).unwrap();
    assert!(content.contains("[[points]]"));
    assert!(content.contains("[[edges]]"));
    assert!(content.contains("[[items]]"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();

    depot().current_dir(dir.path()).arg("init").assert().success();

    depot()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("depot.toml");
    std::fs::write(&path, "# scratch\n").unwrap();

    depot()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("# scratch"));
    assert!(content.contains("Gate"));
}

#[test]
fn test_init_custom_layout_path() {
    let dir = tempdir().unwrap();

    depot()
        .current_dir(dir.path())
        .args(["--layout", "floor.toml", "init"])
        .assert()
        .success();

    assert!(dir.path().join("floor.toml").exists());
    assert!(!dir.path().join("depot.toml").exists());
}

#[test]
fn test_init_respects_root() {
    let dir = tempdir().unwrap();
    let other = tempdir().unwrap();

    depot()
        .current_dir(dir.path())
        .args(["--root", other.path().to_str().unwrap(), "init"])
        .assert()
        .success();

    assert!(other.path().join("depot.toml").exists());
    assert!(!dir.path().join("depot.toml").exists());
}

#[test]
fn test_init_json_output() {
    let dir = tempdir().unwrap();

    let output = depot()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["points"], 6);
    assert_eq!(json["edges"], 5);
    assert_eq!(json["items"], 3);
}

#[test]
fn test_init_records_output() {
    let dir = tempdir().unwrap();

    depot()
        .current_dir(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H depot=1 records=1"))
        .stdout(predicate::str::contains("mode=init"));
}
