//! Integration tests for the `duration` and `watch` commands.

use std::io::Write;
use std::process::{Command, Stdio};

fn dashtick() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dashtick"));
    // Keep the user's real config out of the way
    let home = std::env::temp_dir().join("dashtick-cli-tests-home");
    cmd.env("HOME", home).arg("--quiet");
    cmd
}

fn duration_of(interval: &str) -> String {
    let output = dashtick()
        .args(["duration", interval])
        .output()
        .expect("Failed to execute 'dashtick duration'");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Run `dashtick watch` with `args`, feeding `input` on stdin, and return stdout.
fn watch_with_input(args: &[&str], input: &str) -> String {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut child = dashtick()
        .current_dir(temp_dir.path())
        .arg("watch")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn 'dashtick watch'");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for watch");
    assert!(
        output.status.success(),
        "watch failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_duration_table() {
    assert_eq!(duration_of("OFF"), "off");
    assert_eq!(duration_of("TEN_SECONDS"), "10000");
    assert_eq!(duration_of("one_min"), "60000");
    assert_eq!(duration_of("FIVE_MIN"), "300000");
    assert_eq!(duration_of("QUARTER"), "900000");
    assert_eq!(duration_of("ONE_HOUR"), "3600000");
}

#[test]
fn test_duration_unknown_is_off() {
    assert_eq!(duration_of("TWO_MIN"), "off");
}

#[test]
fn test_watch_announces_each_distinct_selection_once() {
    let stdout = watch_with_input(
        &["--interval", "ONE_MIN", "--editable"],
        "FIVE_MIN\nFIVE_MIN\nbogus\n",
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "interval ONE_MIN 1m",
            "interval FIVE_MIN 5m",
            "unchanged FIVE_MIN",
            "ignored: unknown interval 'bogus'",
        ]
    );
}

#[test]
fn test_watch_readonly_ignores_selection() {
    let stdout = watch_with_input(&["--interval", "ONE_MIN", "--readonly"], "QUARTER\n");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["interval ONE_MIN 1m", "ignored: read-only"]);
}

#[test]
fn test_watch_mount_announces_off() {
    let stdout = watch_with_input(&[], "");
    assert_eq!(stdout.trim(), "interval OFF off");
}
