use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// ============================================================================
// Helper Functions
// ============================================================================

/// A fresh directory used as `$HOME` and for the log file.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tally-cli-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Runs the binary with `home` as `$HOME` and its log inside `home`.
fn tally(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(args)
        .arg("--log-file")
        .arg(home.join("tally.log"))
        .env("HOME", home)
        .env_remove("TALLY_LOG_LEVEL")
        .env_remove("TALLY_LOG_FILE")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// Scripted Keys
// ============================================================================

#[test]
fn test_keys_prints_final_display() {
    let home = scratch_dir("keys");
    let output = tally(&home, &["--keys", "12+3="]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "15\n");
    let _ = fs::remove_dir_all(&home);
}

#[test]
fn test_trace_prints_every_display_update() {
    let home = scratch_dir("trace");
    let output = tally(&home, &["--keys", "12+3=", "--trace"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n12\n+\n3\n15\n");
    let _ = fs::remove_dir_all(&home);
}

#[test]
fn test_keys_divide_by_zero() {
    let home = scratch_dir("div-zero");
    let output = tally(&home, &["--keys", "5/0="]);
    assert_eq!(stdout(&output), "Infinity\n");
    let _ = fs::remove_dir_all(&home);
}

#[test]
fn test_trace_requires_keys() {
    let home = scratch_dir("trace-alone");
    let output = tally(&home, &["--trace"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let _ = fs::remove_dir_all(&home);
}

// ============================================================================
// Config Loading Reaches the Log
// ============================================================================

#[test]
fn test_first_run_generates_config_and_logs_it() {
    let home = scratch_dir("first-run");
    let output = tally(&home, &["--keys", "1", "--log-level", "debug"]);
    assert!(output.status.success());

    assert!(home.join(".tally").join("config.toml").exists());
    let log = fs::read_to_string(home.join("tally.log")).unwrap();
    assert!(log.contains("No config file found"), "log was:\n{log}");
    let _ = fs::remove_dir_all(&home);
}

#[test]
fn test_existing_config_load_is_logged() {
    let home = scratch_dir("reload");
    fs::create_dir_all(home.join(".tally")).unwrap();
    fs::write(home.join(".tally").join("config.toml"), "[tui]\nmouse = false\n").unwrap();

    let output = tally(&home, &["--keys", "1", "--log-level", "info"]);
    assert!(output.status.success());

    let log = fs::read_to_string(home.join("tally.log")).unwrap();
    assert!(log.contains("Loaded config from"), "log was:\n{log}");
    let _ = fs::remove_dir_all(&home);
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let home = scratch_dir("malformed");
    fs::create_dir_all(home.join(".tally")).unwrap();
    fs::write(home.join(".tally").join("config.toml"), "[logging\nlevel = ").unwrap();

    let output = tally(&home, &["--keys", "2*4="]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "8\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("config parse error"));

    let log = fs::read_to_string(home.join("tally.log")).unwrap();
    assert!(log.contains("Ignored config file"), "log was:\n{log}");
    let _ = fs::remove_dir_all(&home);
}
