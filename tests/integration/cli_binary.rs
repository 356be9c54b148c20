//! Integration tests for the rmchars binary

use super::test_utils::list_tree;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn rmchars(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rmchars"))
        .args(args)
        .env_remove("RMCHARS_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_dry_run_prints_pairs_and_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("bad:name.txt"), "").unwrap();
    let before = list_tree(root);

    let output = rmchars(&["-t", "--platform", "posix", root.to_str().unwrap()]);
    assert!(output.status.success(), "stderr={:?}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("TESTING: "));
    assert!(stdout.contains("bad:name.txt to "));
    assert!(stdout.trim_end().ends_with("badname.txt"));
    assert_eq!(list_tree(root), before);
}

#[test]
fn test_quiet_renames_silently() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("dir|x")).unwrap();
    fs::write(root.join("dir|x").join("f?.txt"), "").unwrap();

    let output = rmchars(&["-q", "--platform", "posix", root.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        list_tree(root),
        vec![PathBuf::from("dirx"), PathBuf::from("dirx/f.txt")]
    );
}

#[test]
fn test_automate_with_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a<b>c.txt"), "").unwrap();

    let output = rmchars(&["-a", "--platform", "posix", "--summary", "json", root.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("RENAMING: "));
    let json: serde_json::Value = serde_json::from_str(&lines.collect::<Vec<_>>().join("\n")).unwrap();
    assert_eq!(json["summary"]["renamed"], 1);
    assert!(root.join("abc.txt").exists());
}

#[test]
fn test_create_then_sanitize() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let output = rmchars(&["-c", "1", "--platform", "posix", root.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(fs::read_dir(root).unwrap().count(), 18);

    let output = rmchars(&["--quiet", "--platform", "posix", root.to_str().unwrap()]);
    assert!(output.status.success());
    for entry in fs::read_dir(root).unwrap() {
        let name = entry.unwrap().file_name().to_string_lossy().into_owned();
        assert!(name.starts_with(".  . test"), "unexpected name {:?}", name);
    }
}

#[test]
fn test_usage_errors_fail_before_work() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let file = root.join("plain.txt");
    fs::write(&file, "").unwrap();

    let output = rmchars(&["-t", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a directory."));

    let output = rmchars(&["-c", "16", root.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("too large"));

    let output = rmchars(&[root.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let output = rmchars(&["-a", "-q", root.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    assert_eq!(list_tree(root), vec![PathBuf::from("plain.txt")]);
}

#[test]
fn test_collision_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("ab"), "").unwrap();
    fs::write(root.join("a:b"), "").unwrap();

    let output = rmchars(&["-q", "--platform", "posix", root.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
    assert!(stderr.contains("--on-collision"));

    let output = rmchars(&[
        "-q",
        "--platform",
        "posix",
        "--on-collision",
        "suffix",
        root.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(root.join("ab_1").exists());
}

#[test]
fn test_dry_run_lists_conflicts_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("???"), "").unwrap();
    fs::write(root.join("x:y"), "").unwrap();

    let output = rmchars(&["-t", "--platform", "posix", root.to_str().unwrap()]);
    assert!(output.status.success(), "stderr={:?}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("(would fail: empty name)"));
    assert!(stdout.contains("x:y to "));
    assert!(root.join("???").exists());
    assert!(root.join("x:y").exists());
}

#[test]
fn test_interactive_reads_piped_answers() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a:b"), "").unwrap();
    fs::write(root.join("c:d"), "").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_rmchars"))
        .args(["-i", "--platform", "posix", root.to_str().unwrap()])
        .env_remove("RMCHARS_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"y\nn\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr={:?}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Would you like to rename "));
    assert!(root.join("ab").exists());
    assert!(root.join("c:d").exists());
}
