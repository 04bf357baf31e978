//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary session directory
fn cli_cmd(session_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devwrap").expect("Failed to find devwrap binary");
    cmd.arg("--session-dir").arg(session_dir.path());
    cmd
}

// ============================================================================
// Period Command Tests
// ============================================================================

#[test]
fn test_period_monthly() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["period", "monthly", "--year", "2024", "--month", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period: March 2024"));

    let stored = std::fs::read_to_string(dir.path().join("wrapPeriod.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json["periodType"], "monthly");
    assert_eq!(json["month"], 3);
}

#[test]
fn test_period_monthly_requires_month() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["period", "monthly", "--year", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--month is required"));
}

#[test]
fn test_period_rejects_month_13() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["period", "monthly", "--month", "13"])
        .assert()
        .failure();
}

// ============================================================================
// Create / Show Tests
// ============================================================================

#[test]
fn test_create_then_show() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["period", "yearly", "--year", "2024"])
        .assert()
        .success();

    cli_cmd(&dir)
        .args([
            "create",
            "--personality",
            "hacker",
            "--loc",
            "25000",
            "--coffees",
            "1500",
            "--name",
            "Ada",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Personality: Hacker"));

    cli_cmd(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("WRAP 2024"))
        .stdout(predicate::str::contains("25k"))
        .stdout(predicate::str::contains("1.5k+"))
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Code, Coffee, and Deploys"));
}

#[test]
fn test_invalid_count_becomes_zero() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["create", "--commits", "lots"])
        .assert()
        .success();

    let output = cli_cmd(&dir).args(["show", "--json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["commits"], 0);
}

#[test]
fn test_language_cap_warns() {
    let dir = TempDir::new().unwrap();

    // Defaults already hold three languages
    cli_cmd(&dir)
        .args(["create", "--language", "Rust", "--language", "Go"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Go not added"));
}

#[test]
fn test_unknown_personality_is_rejected() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["create", "--personality", "gta"])
        .assert()
        .failure();
}

// ============================================================================
// Render Tests
// ============================================================================

#[test]
fn test_render_offline_writes_png() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("card.png");

    cli_cmd(&dir)
        .args(["render", "--offline", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("(1080x1920)"))
        .stderr(predicate::str::contains("warning:"));

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_render_default_filename() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["period", "monthly", "--year", "2024", "--month", "3"])
        .assert()
        .success();
    cli_cmd(&dir)
        .args(["create", "--personality", "space"])
        .assert()
        .success();

    cli_cmd(&dir)
        .current_dir(dir.path())
        .args(["render", "--offline", "--width", "270"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "software-engineer-wrap-2024-03-space.png",
        ));

    assert!(dir
        .path()
        .join("software-engineer-wrap-2024-03-space.png")
        .exists());
}

#[test]
fn test_render_zero_width_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("never.png");

    cli_cmd(&dir)
        .args(["render", "--offline", "--width", "0", "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Download failed"));

    assert!(!out.exists());
}

// ============================================================================
// Share / Themes / Clear Tests
// ============================================================================

#[test]
fn test_share_links() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["share-links", "--url", "https://example.com/wrap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My Software Engineer Wrap"))
        .stdout(predicate::str::contains("https://twitter.com/intent/tweet?"))
        .stdout(predicate::str::contains("https://www.instagram.com/"))
        .stdout(predicate::str::contains("https%3A%2F%2Fexample.com%2Fwrap"));
}

#[test]
fn test_themes_list_and_detail() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("batman"))
        .stdout(predicate::str::contains("anime"));

    cli_cmd(&dir)
        .args(["themes", "hacker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hsl(120, 100%, 40%)"))
        .stdout(predicate::str::contains("hacker-matrix"));
}

#[test]
fn test_clear_forgets_session() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["create", "--company", "Initech"])
        .assert()
        .success();
    cli_cmd(&dir).arg("clear").assert().success();

    cli_cmd(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("at TechCorp"));
}
