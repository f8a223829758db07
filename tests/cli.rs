//! Integration tests for the `sufx` binary.

use std::fs;
use std::path::PathBuf;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

static FIXTURE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get or create the test fixture directory (singleton)
fn get_fixture_dir() -> PathBuf {
    FIXTURE_DIR.get_or_init(create_fixture_dir).clone()
}

fn create_fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("sufx_test_fixtures")
        .join(format!("test_{}", std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");

    fs::write(dir.join("mississippi.txt"), "mississippi").unwrap();
    fs::write(dir.join("dollar.txt"), "costs 5$").unwrap();
    fs::write(dir.join("mixed.txt"), "AbcABxabCD").unwrap();
    fs::write(dir.join("empty.txt"), "").unwrap();
    fs::write(dir.join("config.json"), r#"{"terminator": 35, "batch_size": 2}"#).unwrap();

    dir
}

fn run_sufx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sufx"))
        .args(args)
        .current_dir(get_fixture_dir())
        .output()
        .expect("Failed to run sufx")
}

fn run_sufx_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sufx"))
        .args(args)
        .current_dir(get_fixture_dir())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run sufx");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for sufx")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_count() {
    let output = run_sufx(&["count", "mississippi.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "53");
}

#[test]
fn test_count_ignore_case() {
    let output = run_sufx(&["count", "--ignore-case", "mixed.txt"]);
    assert!(output.status.success());
    // Same text as "abcabxabcd"
    assert_eq!(stdout(&output).trim(), "46");
}

#[test]
fn test_contains_exit_status() {
    let output = run_sufx(&["contains", "mississippi.txt", "ssi", "pis"]);
    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("yes\tssi"));
    assert!(text.contains("no\tpis"));

    let output = run_sufx(&["contains", "mississippi.txt", "issip"]);
    assert!(output.status.success());
}

#[test]
fn test_contains_never_matches_terminator() {
    let output = run_sufx(&["contains", "mississippi.txt", "i$", "$"]);
    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("no\ti$"));
    assert!(text.contains("no\t$"));

    let output = run_sufx(&["contains", "--terminator", "#", "mississippi.txt", "pi#"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("no\tpi#"));
}

#[test]
fn test_count_from_stdin() {
    let output = run_sufx_stdin(&["count", "-"], b"mississippi");
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "53");
}

#[test]
fn test_alphabet_root() {
    let output = run_sufx(&["alphabet", "mississippi.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "$ i m p s");
}

#[test]
fn test_stats_json() {
    let output = run_sufx(&["stats", "--json", "mississippi.txt"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["text_len"], 12);
    assert_eq!(report["input_len"], 11);
    assert_eq!(report["suffixes"], 12);
    assert_eq!(report["distinct_substrings"], 53);
}

#[test]
fn test_stats_empty_input() {
    let output = run_sufx(&["stats", "--json", "empty.txt"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["input_len"], 0);
    assert_eq!(report["text_len"], 1);
    assert_eq!(report["distinct_substrings"], 0);
    assert_eq!(report["suffixes"], 1);

    let output = run_sufx(&["stats", "empty.txt"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Input length:         0 bytes"));
}

#[test]
fn test_terminator_in_input_is_rejected() {
    let output = run_sufx(&["count", "dollar.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("terminator"));

    let output = run_sufx(&["count", "--terminator", "#", "dollar.txt"]);
    assert!(output.status.success());
}

#[test]
fn test_config_file() {
    let output = run_sufx(&["count", "--config", "config.json", "dollar.txt"]);
    assert!(output.status.success());
    let expected = {
        let s = "costs 5$";
        let mut set = std::collections::HashSet::new();
        for i in 0..s.len() {
            for j in i + 1..=s.len() {
                set.insert(&s[i..j]);
            }
        }
        set.len()
    };
    assert_eq!(stdout(&output).trim(), expected.to_string());
}

#[test]
fn test_follow_reports_multi_symbol_edge() {
    let output = run_sufx(&["follow", "mississippi.txt", "m"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("spans"));

    let output = run_sufx(&["follow", "mississippi.txt", "i"]);
    assert!(output.status.success());
}
