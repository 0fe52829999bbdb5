//! Integration tests for the fitlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Profile save/show round trip
//! - Daily logging and replace-by-date semantics
//! - Coaching output
//! - Achievements and CSV export

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitlog"))
}

fn set_profile(data_dir: &std::path::Path, goal: &str) {
    cli()
        .args([
            "profile",
            "set",
            "--name",
            "Sam",
            "--age",
            "30",
            "--height",
            "175",
            "--weight",
            "70",
            "--goal-weight",
            "65",
            "--goal",
            goal,
            "--activity",
            "medium",
        ])
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Local-first personal fitness journal",
        ));
}

#[test]
fn test_profile_set_and_show() {
    let temp_dir = setup_test_dir();
    set_profile(temp_dir.path(), "weight_loss");

    cli()
        .args(["profile", "show"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sam"))
        .stdout(predicate::str::contains("Weight loss"))
        // BMR for 70 kg / 175 cm / 30 y
        .stdout(predicate::str::contains("1649 kcal/day"));
}

#[test]
fn test_profile_set_rejects_unknown_goal() {
    let temp_dir = setup_test_dir();

    cli()
        .args([
            "profile",
            "set",
            "--name",
            "Sam",
            "--age",
            "30",
            "--height",
            "175",
            "--weight",
            "70",
            "--goal-weight",
            "65",
            "--goal",
            "bulking",
            "--activity",
            "medium",
        ])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_log_creates_journal_and_prints_plan() {
    let temp_dir = setup_test_dir();
    set_profile(temp_dir.path(), "weight_loss");

    cli()
        .args([
            "log",
            "--date",
            "2024-01-05",
            "--water",
            "1500",
            "--calories",
            "2000",
            "--steps",
            "8000",
            "--minutes",
            "25",
        ])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry for 2024-01-05 saved"))
        .stdout(predicate::str::contains("TODAY'S COACHING"))
        .stdout(predicate::str::contains("Plan for tomorrow"));

    assert!(temp_dir.path().join("journal.json").exists());
}

#[test]
fn test_log_replaces_entry_for_same_date() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["log", "--date", "2024-01-05", "--calories", "1800"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    cli()
        .args(["log", "--date", "2024-01-05", "--calories", "2500"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry for 2024-01-05 replaced"));

    // Exactly one entry for the date, holding the second payload
    let raw = fs::read_to_string(temp_dir.path().join("journal.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = json["entries"].as_object().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries["2024-01-05"]["calories"], 2500);
}

#[test]
fn test_log_without_profile_is_informational() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["log", "--date", "2024-01-05", "--calories", "2000"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("You consumed 2000 kcal today."));
}

#[test]
fn test_summary_reads_back_entry() {
    let temp_dir = setup_test_dir();

    cli()
        .args([
            "log",
            "--date",
            "2024-01-05",
            "--water",
            "2100",
            "--workout",
            "Morning run",
            "--workout-minutes",
            "30",
        ])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    cli()
        .args(["summary", "--date", "2024-01-05"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2100 ml"))
        .stdout(predicate::str::contains("Morning run"));
}

#[test]
fn test_achievements_start_locked() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("achievements")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Achievements unlocked: 0/6"))
        .stdout(predicate::str::contains("100,000 steps"));
}

#[test]
fn test_steps_achievement_unlocks_and_persists() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["log", "--date", "2024-01-05", "--steps", "100000"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Achievement unlocked"));

    cli()
        .arg("achievements")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 100,000 steps"));
}

#[test]
fn test_export_writes_csv() {
    let temp_dir = setup_test_dir();
    let out = temp_dir.path().join("history.csv");

    cli()
        .args(["log", "--date", "2024-01-05", "--water", "1500"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    cli()
        .args(["export", "--output"])
        .arg(&out)
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("date,"));
    assert!(contents.contains("2024-01-05"));
}

#[test]
fn test_trends_window_has_fixed_length() {
    let temp_dir = setup_test_dir();

    let output = cli()
        .args(["trends", "--metric", "water", "--days", "7"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .output()
        .expect("failed to run trends");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // One line per day even with nothing logged
    let day_lines = stdout
        .lines()
        .filter(|l| l.trim_start().starts_with('2'))
        .count();
    assert_eq!(day_lines, 7);
}

#[test]
fn test_trends_rejects_unknown_metric() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["trends", "--metric", "sleep"])
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure();
}
