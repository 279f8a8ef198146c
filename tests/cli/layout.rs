use crate::cli::support::{depot, write_layout};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Layout loading and validation tests
// ============================================================================

#[test]
fn test_layout_negative_weight_exit_code_3() {
    let dir = tempdir().unwrap();
    write_layout(
        dir.path(),
        r#"
[[points]]
id = "A"

[[points]]
id = "B"

[[edges]]
from = "A"
to = "B"
weight = -1.0
"#,
    );

    depot()
        .current_dir(dir.path())
        .arg("points")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge weight"));
}

#[test]
fn test_layout_edge_to_unknown_point_exit_code_3() {
    let dir = tempdir().unwrap();
    write_layout(
        dir.path(),
        r#"
[[points]]
id = "A"

[[edges]]
from = "A"
to = "Ghost"
weight = 1.0
"#,
    );

    depot()
        .current_dir(dir.path())
        .args(["--format", "json", "route", "A", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_point\""));
}

#[test]
fn test_layout_malformed_toml_exit_code_3() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), "[[points]\nid = ");

    depot()
        .current_dir(dir.path())
        .arg("points")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid layout"));
}

#[test]
fn test_layout_future_version_rejected() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), "version = 99\n");

    depot()
        .current_dir(dir.path())
        .arg("points")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported version 99"));
}

#[test]
fn test_layout_obstacle_alias() {
    let dir = tempdir().unwrap();
    write_layout(
        dir.path(),
        r#"
[[points]]
id = "Column"
x = 4.0
y = 2.0
obstacle = true
"#,
    );

    depot()
        .current_dir(dir.path())
        .arg("points")
        .assert()
        .success()
        .stdout(predicate::str::contains("Column (4, 2) edges=0 [obstacle]"));
}

#[test]
fn test_layout_from_env_var() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("elsewhere.toml");
    std::fs::write(&path, "[[points]]\nid = \"Dock\"\n").unwrap();

    depot()
        .current_dir(dir.path())
        .env("DEPOT_LAYOUT", &path)
        .arg("points")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dock (0, 0) edges=0"));
}

#[test]
fn test_layout_flag_overrides_default_file() {
    let dir = tempdir().unwrap();
    write_layout(dir.path(), "[[points]]\nid = \"Default\"\n");
    std::fs::write(dir.path().join("alt.toml"), "[[points]]\nid = \"Alt\"\n").unwrap();

    depot()
        .current_dir(dir.path())
        .args(["--layout", "alt.toml", "points"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alt"))
        .stdout(predicate::str::contains("Default").not());
}

#[test]
fn test_layout_duplicate_point_keeps_first() {
    let dir = tempdir().unwrap();
    write_layout(
        dir.path(),
        r#"
[[points]]
id = "A"
x = 1.0

[[points]]
id = "A"
x = 9.0
"#,
    );

    depot()
        .current_dir(dir.path())
        .arg("points")
        .assert()
        .success()
        .stdout(predicate::str::contains("A (1, 0)"))
        .stdout(predicate::str::contains("A (9, 0)").not());
}
