//! CLI integration tests
//!
//! These run the built binary against temporary project trees and check:
//! - Status line output and ordering
//! - Exit codes
//! - Report formats
//! - Root and path overrides

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const LEGACY_SINGLE: &str = include_str!("fixtures/routes/legacy_single.ts");
const LEGACY_SINGLE_EXPECTED: &str = include_str!("fixtures/routes/legacy_single.expected.ts");

const DEFAULT_ROUTES: [&str; 10] = [
    "src/app/api/dca-portfolios/[id]/route.ts",
    "src/app/api/dca-transactions/[id]/route.ts",
    "src/app/api/holdings-snapshots/[id]/route.ts",
    "src/app/api/network-fees/[id]/route.ts",
    "src/app/api/non-current-assets/[id]/route.ts",
    "src/app/api/partita-iva/income/[id]/route.ts",
    "src/app/api/partita-iva/tax-payments/[id]/route.ts",
    "src/app/api/transactions/[id]/route.ts",
    "src/app/api/transfers/[id]/route.ts",
    "src/app/api/debug/crypto-portfolio/route.ts",
];

fn routefix_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_routefix"))
}

fn routefix(dir: &Path, args: &[&str]) -> Output {
    Command::new(routefix_bin())
        .current_dir(dir)
        .args(args)
        .env_remove("ROUTEFIX_ROOT")
        .env_remove("ROUTEFIX_LOG_LEVEL")
        .env_remove("ROUTEFIX_LOG_JSON")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute routefix")
}

fn write_route(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_cli_help() {
    let output = Command::new(routefix_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute routefix");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("routefix"));
    assert!(stdout.contains("--root"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_empty_project_reports_every_default_route_missing() {
    let temp = TempDir::new().unwrap();
    let output = routefix(temp.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut expected: Vec<String> = DEFAULT_ROUTES
        .iter()
        .map(|route| format!("File not found: {}", route))
        .collect();
    expected.push("All files fixed!".to_string());

    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_default_run_patches_present_routes() {
    let temp = TempDir::new().unwrap();
    write_route(temp.path(), DEFAULT_ROUTES[8], LEGACY_SINGLE);

    let output = routefix(temp.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[7], "File not found: src/app/api/transactions/[id]/route.ts");
    assert_eq!(lines[8], "Fixed src/app/api/transfers/[id]/route.ts");
    assert_eq!(lines[10], "All files fixed!");

    let patched = fs::read_to_string(temp.path().join(DEFAULT_ROUTES[8])).unwrap();
    assert_eq!(patched, LEGACY_SINGLE_EXPECTED);
}

#[test]
fn test_root_flag_and_explicit_paths() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("web");
    write_route(&project, "src/app/api/categories/[id]/route.ts", LEGACY_SINGLE);

    let cwd = TempDir::new().unwrap();
    let output = routefix(
        cwd.path(),
        &[
            "--root",
            project.to_str().unwrap(),
            "src/app/api/categories/[id]/route.ts",
        ],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Fixed src/app/api/categories/[id]/route.ts\nAll files fixed!\n"
    );
    assert_eq!(
        fs::read_to_string(project.join("src/app/api/categories/[id]/route.ts")).unwrap(),
        LEGACY_SINGLE_EXPECTED
    );
}

#[test]
fn test_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    let output = routefix(temp.path(), &["--root", "does-not-exist"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_unreadable_route_aborts_remaining_queue() {
    let temp = TempDir::new().unwrap();
    write_route(temp.path(), "first.ts", LEGACY_SINGLE);
    fs::write(temp.path().join("second.ts"), [0xff, 0xfe, 0xfd]).unwrap();
    write_route(temp.path(), "third.ts", LEGACY_SINGLE);

    let output = routefix(temp.path(), &["first.ts", "second.ts", "third.ts"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Fixed first.ts\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read second.ts"));
    assert_eq!(
        fs::read_to_string(temp.path().join("third.ts")).unwrap(),
        LEGACY_SINGLE
    );
}

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();
    write_route(temp.path(), "route.ts", LEGACY_SINGLE);

    let output = routefix(temp.path(), &["--format", "json", "route.ts", "gone.ts"]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files"][0]["path"], "route.ts");
    assert_eq!(report["files"][0]["status"], "fixed");
    assert_eq!(report["files"][0]["awaits_inserted"], 2);
    assert_eq!(report["files"][1]["status"], "not_found");
}

#[test]
fn test_second_run_is_stable() {
    let temp = TempDir::new().unwrap();
    write_route(temp.path(), "route.ts", LEGACY_SINGLE);

    assert!(routefix(temp.path(), &["route.ts"]).status.success());
    let first = fs::read_to_string(temp.path().join("route.ts")).unwrap();
    assert!(routefix(temp.path(), &["route.ts"]).status.success());
    let second = fs::read_to_string(temp.path().join("route.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_piped_stderr_has_no_color_codes() {
    let temp = TempDir::new().unwrap();
    write_route(temp.path(), "plain.ts", "export {}\n");

    let output = routefix(temp.path(), &["plain.ts"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no pattern matched"));
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn test_invalid_log_json_env_fails() {
    let temp = TempDir::new().unwrap();
    write_route(temp.path(), "route.ts", LEGACY_SINGLE);

    let output = Command::new(routefix_bin())
        .current_dir(temp.path())
        .arg("route.ts")
        .env_remove("ROUTEFIX_ROOT")
        .env_remove("ROUTEFIX_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .env("ROUTEFIX_LOG_JSON", "maybe")
        .output()
        .expect("Failed to execute routefix");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ROUTEFIX_LOG_JSON"));
    assert_eq!(
        fs::read_to_string(temp.path().join("route.ts")).unwrap(),
        LEGACY_SINGLE
    );
}
