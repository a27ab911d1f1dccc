//! The `school-profile` binary, run end to end

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_school-profile");

fn fixture() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/lakeside.json"))
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary starts");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("binary exits")
}

#[test]
fn test_renders_file_with_template_override() {
    let output = Command::new(BIN)
        .arg(fixture())
        .args(["--fragment", "-t", "minimal"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("sp-page sp-minimal"));
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Lakeside Community School"));
}

#[test]
fn test_reads_record_from_stdin() {
    let output = run_with_stdin(&["--compact"], r#"{"name": "Riverside School"}"#);

    assert!(output.status.success());
    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Riverside School</title>"));
    assert!(html.contains("sp-page sp-modern"));
}

#[test]
fn test_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("profile.html");
    let output = Command::new(BIN)
        .arg(fixture())
        .arg("-o")
        .arg(&target)
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let html = std::fs::read_to_string(&target).unwrap();
    assert!(html.contains("sp-page sp-classic"));
}

#[test]
fn test_theme_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("harbor.toml");
    std::fs::write(&theme, "[colors]\nprimary = \"#000080\"\ntext = \"#101010\"\n").unwrap();

    let output = run_with_stdin(
        &["-s", theme.to_str().unwrap(), "--fragment"],
        r#"{"name": "A"}"#,
    );

    assert!(output.status.success());
    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("--primary: #000080;"));
    assert!(html.contains("--text: #101010;"));
    assert!(html.contains("--text-inverse: #ffffff;"));
}

#[test]
fn test_invalid_record_is_reported_once() {
    let output = run_with_stdin(&[], "{\"name\": }");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("invalid profile record").count(), 1);
    assert!(!stderr.contains("Profile error at"));
}

#[test]
fn test_unknown_template_flag_is_rejected() {
    let output = run_with_stdin(&["-t", "brutalist"], r#"{"name": "A"}"#);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown template: brutalist"));
}

#[test]
fn test_missing_input_file_fails() {
    let output = Command::new(BIN)
        .arg("does-not-exist.json")
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading file 'does-not-exist.json'"));
}
