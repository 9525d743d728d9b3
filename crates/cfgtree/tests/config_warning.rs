//! Integration tests for config loading and warning behavior.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".cfgtree");
    fs::create_dir_all(&config_dir).expect("Failed to create .cfgtree dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

fn run_cfgtree(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cfgtree"))
        .current_dir(dir)
        .env("HOME", dir.join("home"))
        .args(args)
        .output()
        .expect("Failed to execute cfgtree")
}

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "invalid toml [[[");

    let output = run_cfgtree(temp_dir.path(), &["status"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
    // Defaults are used, so the command still succeeds
    assert!(output.status.success());
}

#[test]
fn test_config_warning_on_invalid_values() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "[status]\ncolumn_width = 0\n");

    let output = run_cfgtree(temp_dir.path(), &["status"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "[status]\ncolumn_width = 24\n");

    let output = run_cfgtree(temp_dir.path(), &["status"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected warning in stderr: {}",
        stderr
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.starts_with("simulation.engine"))
        .expect("engine line missing");
    assert_eq!(line, format!("{:<24}TGeant3", "simulation.engine"));
}

#[test]
fn test_namespace_qualifies_types() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "[router]\nnamespace = \"o2sim\"\n");

    let output = run_cfgtree(temp_dir.path(), &["types"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().all(|l| l.starts_with("o2sim::")), "got: {}", stdout);
}

#[test]
fn test_custom_comment_marker() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "[batch]\ncomment_marker = \"//\"\n");
    fs::write(
        temp_dir.path().join("run.cfg"),
        "// header\nsimulation.engine TFluka // transport\n",
    )
    .expect("Failed to write command file");

    let output = run_cfgtree(temp_dir.path(), &["run", "-c", "run.cfg"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("simulation.engine") && l.ends_with("TFluka")));
}
