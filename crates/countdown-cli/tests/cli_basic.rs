//! Basic CLI E2E tests.
//!
//! Tests invoke the `countdown` binary against a throwaway data directory
//! and verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_countdown"))
        .env("COUNTDOWN_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn add(data_dir: &Path, name: &str, date: &str) -> String {
    let (code, stdout, stderr) = run_cli(data_dir, &["add", name, "--date", date]);
    assert_eq!(code, 0, "add failed: {stderr}");
    stdout
        .trim()
        .strip_prefix("Countdown created: ")
        .expect("missing created line")
        .to_string()
}

fn list_json(data_dir: &Path, today: &str) -> Vec<serde_json::Value> {
    let (code, stdout, _) = run_cli(data_dir, &["list", "--json", "--today", today]);
    assert_eq!(code, 0, "list failed");
    serde_json::from_str::<serde_json::Value>(&stdout)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["list"]);
    assert_eq!(code, 0, "List failed");
    assert!(stdout.contains("No Countdowns"));
}

#[test]
fn test_add_and_list_sorted() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Summer", "2024-07-01");
    add(dir.path(), "Vacation", "2024-01-11");

    let items = list_json(dir.path(), "2024-01-01");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Vacation");
    assert_eq!(items[0]["daysRemaining"], 10);
    assert_eq!(items[0]["isToday"], false);
    assert_eq!(items[0]["targetDate"], "2024-01-11T00:00:00");
    assert_eq!(items[1]["name"], "Summer");
}

#[test]
fn test_add_blank_name_fails() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["add", "   ", "--date", "2024-01-11"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_add_bad_date_fails() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["add", "Trip", "--date", "next tuesday"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid date"));
}

#[test]
fn test_edit_and_show() {
    let dir = TempDir::new().unwrap();
    let id = add(dir.path(), "Trip", "2024-01-11");

    let (code, _, _) = run_cli(dir.path(), &["edit", &id, "--name", "Big trip", "--date", "2024-01-01"]);
    assert_eq!(code, 0, "Edit failed");

    let (code, stdout, _) = run_cli(dir.path(), &["show", &id, "--today", "2024-01-01"]);
    assert_eq!(code, 0, "Show failed");
    let shown: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(shown["name"], "Big trip");
    assert_eq!(shown["daysRemaining"], 0);
    assert_eq!(shown["isToday"], true);
}

#[test]
fn test_edit_unknown_fails() {
    let dir = TempDir::new().unwrap();
    let missing = uuid::Uuid::new_v4().to_string();
    let (code, _, stderr) = run_cli(dir.path(), &["edit", &missing, "--name", "x"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_delete() {
    let dir = TempDir::new().unwrap();
    let keep = add(dir.path(), "Keep", "2024-02-01");
    let gone = add(dir.path(), "Gone", "2024-03-01");
    let unknown = uuid::Uuid::new_v4().to_string();

    let (code, stdout, _) = run_cli(dir.path(), &["delete", &gone, &unknown]);
    assert_eq!(code, 0, "Delete failed");
    assert!(stdout.contains("Deleted 1"));

    let items = list_json(dir.path(), "2024-01-01");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], keep);
}

#[test]
fn test_widget_small_features_nearest() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Later", "2024-03-01");
    add(dir.path(), "Vacation", "2024-01-11");

    let (code, stdout, _) = run_cli(dir.path(), &["widget", "--family", "small", "--today", "2024-01-01"]);
    assert_eq!(code, 0, "Widget failed");
    assert_eq!(stdout.trim(), "Vacation\n10\ndays");
}

#[test]
fn test_widget_selection_and_json() {
    let dir = TempDir::new().unwrap();
    let later = add(dir.path(), "Later", "2024-03-01");
    add(dir.path(), "Vacation", "2024-01-11");

    let (code, stdout, _) = run_cli(
        dir.path(),
        &["widget", "--select", &later, "--today", "2024-01-01", "--json"],
    );
    assert_eq!(code, 0, "Widget JSON failed");
    let out: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(out["timeline"]["entries"][0]["countdown"]["name"], "Later");
    assert_eq!(out["timeline"]["refreshAfter"], "2024-01-02T00:00:00");
    assert!(out["refreshRequestedAt"].is_string());
}

#[test]
fn test_widget_large_empty() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["widget", "--family", "large"]);
    assert_eq!(code, 0, "Widget failed");
    assert!(stdout.contains("Open the app to add one"));
}

#[test]
fn test_picker_lists_sorted() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Later", "2024-03-01");
    let first = add(dir.path(), "Sooner", "2024-01-11");

    let (code, stdout, _) = run_cli(dir.path(), &["picker", "--json"]);
    assert_eq!(code, 0, "Picker failed");
    let entities: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0]["id"], first);

    let (_, stdout, _) = run_cli(dir.path(), &["picker", "--default"]);
    assert!(stdout.contains("Sooner"));
}

#[test]
fn test_corrupt_storage_lists_empty() {
    let dir = TempDir::new().unwrap();
    let container = dir.path().join("group.com.countdownwidget");
    std::fs::create_dir_all(&container).unwrap();
    std::fs::write(container.join("countdowns.json"), "{oops").unwrap();

    let items = list_json(dir.path(), "2024-01-01");
    assert!(items.is_empty());
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "widget.default_family"]);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "small");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "widget.default_family", "medium"]);
    assert_eq!(code, 0, "Config set failed");
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "widget.default_family"]);
    assert_eq!(stdout.trim(), "medium");

    let (code, _, _) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_ne!(code, 0);
}

#[test]
fn test_app_group_isolates_storage() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Default group", "2024-01-11");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "storage.app_group", "group.other"]);
    assert_eq!(code, 0);
    assert!(list_json(dir.path(), "2024-01-01").is_empty());
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0, "Completions failed");
    assert!(stdout.contains("countdown"));
}

#[test]
fn test_broken_config_is_reported_and_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let broken = "[storage]\napp_group = \"group.mine\"\n\n[widget]\nlarge_list_limit = 3\nbroken = [\n";
    std::fs::write(&config_path, broken).unwrap();

    let (code, _, stderr) = run_cli(dir.path(), &["list"]);
    assert_eq!(code, 0, "List failed");
    assert!(stderr.contains("using default config"), "stderr: {stderr}");

    let (code, stdout, stderr) = run_cli(dir.path(), &["config", "set", "widget.large_list_limit", "7"]);
    assert_ne!(code, 0);
    assert!(!stdout.contains("ok"));
    assert!(stderr.contains("error:"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), broken);
}

#[test]
fn test_app_group_cannot_escape_data_dir() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "storage.app_group", "../../x"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("storage.app_group"));

    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "storage.app_group"]);
    assert_eq!(stdout.trim(), "group.com.countdownwidget");
}

#[test]
fn test_picker_and_widget_accept_uppercase_id() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Other", "2024-01-05");
    let id = add(dir.path(), "Trip", "2024-01-02");
    let upper = id.to_uppercase();

    let (code, stdout, _) = run_cli(dir.path(), &["picker", "--id", &upper]);
    assert_eq!(code, 0, "Picker failed");
    assert_eq!(stdout.trim(), format!("{id}  Trip"));

    let (code, stdout, _) = run_cli(
        dir.path(),
        &["widget", "--select", &upper, "--today", "2024-01-01"],
    );
    assert_eq!(code, 0, "Widget failed");
    assert_eq!(stdout.trim(), "Trip\n1\nday");
}
