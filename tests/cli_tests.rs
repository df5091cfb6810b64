//! End-to-end tests for the `lumen-site` command line.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::{bundle_json, write_bundle, write_config};

/// Path to the lumen-site binary
const LUMEN_BIN: &str = env!("CARGO_BIN_EXE_lumen-site");

/// Runs the binary with an isolated config directory.
fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(LUMEN_BIN)
        .env("LUMEN_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json_stdout(output: &Output) -> Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_json_for_nested_path() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["theme", "/ai-automation/case-studies/42", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let json = json_stdout(&output);
    assert_eq!(json["scheme"], "automation");
    assert_eq!(json["prefix"], "ai-automation");
    assert_eq!(json["colors"]["dark"], "#4C1D95");
}

#[test]
fn test_theme_human_readable_for_unknown_route() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["theme", "/totally-unknown"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Scheme:    default"));
    assert!(out.contains("#3B82F6  (59, 130, 246)"));
}

#[test]
fn test_theme_honors_forced_scheme() {
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), "[theme]\nforced_scheme = \"brand\"\n");

    let output = run(&["theme", "/ai-automation", "--json"], config_dir.path());
    assert_eq!(json_stdout(&output)["scheme"], "brand");

    let output = run(
        &["theme", "/ai-automation", "--json", "--no-override"],
        config_dir.path(),
    );
    assert_eq!(json_stdout(&output)["scheme"], "automation");
}

// ============================================================================
// Focus Command Tests
// ============================================================================

#[test]
fn test_focus_set_show_clear() {
    let config_dir = TempDir::new().unwrap();

    let output = run(&["focus", "show"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Focus: (none)"));

    let output = run(&["focus", "set", "tee-sheet"], config_dir.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let stored = fs::read_to_string(config_dir.path().join("storage.json")).unwrap();
    let stored: Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored["lumen.focus"], "tee-sheet");

    let output = run(&["focus", "show", "--json"], config_dir.path());
    let json = json_stdout(&output);
    assert_eq!(json["focus"], "tee-sheet");
    assert_eq!(json["label"], "Tee Sheet");

    let output = run(&["focus", "clear"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let output = run(&["focus", "show", "--json"], config_dir.path());
    assert!(json_stdout(&output)["focus"].is_null());
}

#[test]
fn test_focus_set_unknown_key_fails() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["focus", "set", "gardening"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown focus"));
    assert!(!config_dir.path().join("storage.json").exists());
}

#[test]
fn test_focus_show_ignores_invalid_stored_value() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("storage.json"),
        r#"{"lumen.focus": "bogus"}"#,
    )
    .unwrap();

    let output = run(&["focus", "show", "--json"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(json_stdout(&output)["focus"].is_null());
}

// ============================================================================
// Content Command Tests
// ============================================================================

#[test]
fn test_content_check_embedded() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["content", "check", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let json = json_stdout(&output);
    assert_eq!(json["valid"], true);
    assert_eq!(json["bundles"].as_array().unwrap().len(), 3);
    assert_eq!(json["missing"], serde_json::json!(["web", "all-solutions"]));
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_content_check_reports_unknown_icons_as_warnings() {
    let config_dir = TempDir::new().unwrap();
    let content_dir = TempDir::new().unwrap();
    write_bundle(content_dir.path(), "web", &bundle_json("web", "Sites that convert"));

    let dir = content_dir.path().to_str().unwrap();
    let output = run(&["content", "check", "--dir", dir], config_dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("warning: web: capability 'Launch fast' uses unknown icon 'rocket'"));
}

#[test]
fn test_content_check_fails_on_focus_mismatch() {
    let config_dir = TempDir::new().unwrap();
    let content_dir = TempDir::new().unwrap();
    write_bundle(content_dir.path(), "crm", &bundle_json("web", "Wrong file"));

    let dir = content_dir.path().to_str().unwrap();
    let output = run(&["content", "check", "--dir", dir], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Content check failed"));
}

#[test]
fn test_content_check_fails_on_empty_subline() {
    let config_dir = TempDir::new().unwrap();
    let content_dir = TempDir::new().unwrap();
    write_bundle(content_dir.path(), "ai-ml", &bundle_json("ai-ml", "   "));

    let dir = content_dir.path().to_str().unwrap();
    let output = run(&["content", "check", "--dir", dir, "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let json = json_stdout(&output);
    assert_eq!(json["valid"], false);
    assert!(json["error"].as_str().unwrap().contains("hero.subline"));
}

#[test]
fn test_content_check_missing_dir_is_io_error() {
    let config_dir = TempDir::new().unwrap();
    let missing = config_dir.path().join("does-not-exist");

    let output = run(
        &["content", "check", "--dir", missing.to_str().unwrap()],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_content_show() {
    let config_dir = TempDir::new().unwrap();

    let output = run(&["content", "show", "crm", "--json"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(json_stdout(&output)["focus"], "crm");

    let output = run(&["content", "show", "web"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No content bundle for focus 'web'"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_path_uses_override_dir() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["config", "path"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim(),
        config_dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_config_show_defaults() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["config", "show", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let json = json_stdout(&output);
    assert_eq!(json["server"]["host"], "127.0.0.1");
    assert_eq!(json["server"]["port"], 3000);
    assert!(json["content"]["dir"].is_null());
    assert!(json["theme"]["forced_scheme"].is_null());
    assert_eq!(
        json["storage"]["file"],
        config_dir.path().join("storage.json").display().to_string()
    );
}

#[test]
fn test_config_show_rejects_invalid_file() {
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), "[server]\nhost = \"127.0.0.1\"\nport = 0\n");

    let output = run(&["config", "show"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
