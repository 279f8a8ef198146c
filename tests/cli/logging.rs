use crate::cli::support::{depot, init_layout};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .env_remove("DEPOT_LOG")
        .args(["--log-level", "debug", "points"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .env_remove("DEPOT_LOG")
        .args(["--log-level", "warn", "points"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_route_search() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .env_remove("DEPOT_LOG")
        .args(["--verbose", "route", "Gate", "Shelf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_layout"));
}

#[test]
fn test_default_logging_is_silent() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .env_remove("DEPOT_LOG")
        .args(["route", "Gate", "Shelf"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_env_filter_overrides_flags() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .env("DEPOT_LOG", "depot=debug")
        .args(["--log-level", "warn", "points"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_produces_valid_json() {
    let dir = tempdir().unwrap();
    init_layout(dir.path());

    depot()
        .current_dir(dir.path())
        .env_remove("DEPOT_LOG")
        .args(["--log-json", "--log-level", "debug", "points"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"timestamp\""))
        .stderr(predicate::str::contains("\"level\""))
        .stderr(predicate::str::contains("\"message\""));
}
