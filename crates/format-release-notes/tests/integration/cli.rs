// Copyright 2026 Oxide Computer Company

//! End-to-end tests that run the `format-release-notes` binary.

use anyhow::{Context, Result};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use camino::Utf8Path;
use camino_tempfile::Utf8TempDir;
use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

const HASH_A: &str = "1111111111111111111111111111111111111111";
const HASH_B: &str = "0123456789abcdef0123456789abcdef01234567";

/// Writes content to a file atomically.
fn write_file(
    path: impl AsRef<Utf8Path>,
    content: impl AsRef<[u8]>,
) -> std::io::Result<()> {
    let path = path.as_ref();
    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| f.write_all(content.as_ref()))
        .map_err(|e| e.into())
}

/// Returns a log entry in the default `git log` layout.
fn entry(hash: &str, message: &[&str]) -> String {
    let mut s = format!(
        "commit {hash}\n\
         Author: Jane Doe <jane@example.com>\n\
         Date:   Mon Jan 1 00:00:00 2024 +0000\n\
         \n"
    );
    for line in message {
        s.push_str("    ");
        s.push_str(line);
        s.push('\n');
    }
    s
}

/// Runs the binary with `args`, feeding `stdin` to it.
fn run(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_format-release-notes"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn format-release-notes")?;

    // A failing run may exit before reading stdin, so a broken pipe here is
    // not an error.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    Ok(child.wait_with_output()?)
}

/// Runs the binary and returns its stdout, asserting that it succeeded
/// silently.
fn run_ok(args: &[&str], stdin: &str) -> Result<String> {
    let output = run(args, stdin)?;
    assert!(
        output.status.success(),
        "format-release-notes failed ({}): {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        output.stderr.is_empty(),
        "successful run should not write to stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8(output.stdout)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_empty_stdin() -> Result<()> {
    assert_eq!(run_ok(&[], "")?, "\n");
    Ok(())
}

#[test]
fn test_single_entry_from_stdin() -> Result<()> {
    let stdout = run_ok(&[], &entry(HASH_A, &["Fix the thing"]))?;
    assert_eq!(stdout, format!("|{HASH_A}|Fix the thing|\n"));
    Ok(())
}

#[test]
fn test_multi_line_message() -> Result<()> {
    let input =
        entry(HASH_A, &["Fix the thing", "with extra detail", "and more"]);
    let stdout = run_ok(&[], &input)?;
    assert_eq!(stdout, format!("|{HASH_A}|Fix the thing|\n"));
    Ok(())
}

#[test]
fn test_git_log_layout() -> Result<()> {
    // `git log` separates entries with a blank line.
    let input = format!(
        "{}\n{}",
        entry(HASH_A, &["First change", "", "Body paragraph"]),
        entry(HASH_B, &["Second change"])
    );
    let stdout = run_ok(&[], &input)?;
    assert_eq!(
        stdout,
        format!("|{HASH_A}|First change|\n|{HASH_B}|Second change|\n")
    );
    Ok(())
}

#[test]
fn test_oldest_entry_is_merge() -> Result<()> {
    // `git log` ends with the oldest commit. A merge commit has an extra
    // `Merge:` header, so it passes through with its own final newline and
    // no blank line is added after it.
    let merge = "commit 2222222222222222222222222222222222222222\n\
                 Merge: abc1234 def5678\n\
                 Author: Jane Doe <jane@example.com>\n\
                 Date:   Mon Jan 1 00:00:00 2024 +0000\n\
                 \n\
                 \x20   Merge branch 'feature'\n";
    let input = format!("{}\n{merge}", entry(HASH_A, &["Fix"]));
    let stdout = run_ok(&[], &input)?;
    assert_eq!(stdout, format!("|{HASH_A}|Fix|\n{merge}"));
    assert!(!stdout.ends_with("\n\n"), "no extra blank line: {stdout:?}");
    Ok(())
}

#[test]
fn test_passthrough() -> Result<()> {
    let input = format!("not a log\n{}", entry(&HASH_A[..39], &["Short"]));
    let stdout = run_ok(&[], &input)?;
    assert_eq!(stdout, input, "input already ends in a newline");

    let stdout = run_ok(&[], "no trailing newline")?;
    assert_eq!(stdout, "no trailing newline\n");
    Ok(())
}

#[test]
fn test_files_concatenated_in_order() -> Result<()> {
    let temp = Utf8TempDir::with_prefix("format-release-notes-")?;
    let first = temp.path().join("first.log");
    let second = temp.path().join("second.log");
    write_file(&first, entry(HASH_A, &["First"]))?;
    write_file(&second, entry(HASH_B, &["Second"]))?;

    let stdout = run_ok(&[second.as_str(), first.as_str()], "ignored")?;
    assert_eq!(stdout, format!("|{HASH_B}|Second||{HASH_A}|First|\n"));
    Ok(())
}

#[test]
fn test_entry_split_across_files() -> Result<()> {
    // The files are formatted as one blob, so an entry split at a line
    // boundary still matches once concatenated.
    let temp = Utf8TempDir::with_prefix("format-release-notes-")?;
    let full = entry(HASH_A, &["Split"]);
    let (head, tail) = full.split_at(full.find("Author").unwrap());
    let first = temp.path().join("head.log");
    let second = temp.path().join("tail.log");
    write_file(&first, head)?;
    write_file(&second, tail)?;

    let stdout = run_ok(&[first.as_str(), second.as_str()], "")?;
    assert_eq!(stdout, format!("|{HASH_A}|Split|\n"));

    // Without the tail, the head alone is passed through.
    let stdout = run_ok(&[first.as_str()], "")?;
    assert_eq!(stdout, head);
    Ok(())
}

#[test]
fn test_dash_reads_stdin_in_position() -> Result<()> {
    let temp = Utf8TempDir::with_prefix("format-release-notes-")?;
    let file = temp.path().join("tail.log");
    write_file(&file, entry(HASH_B, &["From file"]))?;

    let stdout =
        run_ok(&["-", file.as_str()], &entry(HASH_A, &["From stdin"]))?;
    assert_eq!(
        stdout,
        format!("|{HASH_A}|From stdin||{HASH_B}|From file|\n")
    );
    Ok(())
}

#[test]
fn test_missing_file_fails() -> Result<()> {
    let temp = Utf8TempDir::with_prefix("format-release-notes-")?;
    let present = temp.path().join("present.log");
    let missing = temp.path().join("missing.log");
    write_file(&present, entry(HASH_A, &["Present"]))?;

    let output = run(&[present.as_str(), missing.as_str()], "")?;
    assert!(!output.status.success(), "missing file should fail");
    assert!(output.stdout.is_empty(), "no partial output on failure");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains(missing.as_str()),
        "diagnostic should name the missing file: {stderr}"
    );
    Ok(())
}

#[test]
fn test_unknown_flag_is_usage_error() -> Result<()> {
    let output = run(&["--bogus"], "")?;
    assert_eq!(output.status.code(), Some(2), "clap usage error");
    assert!(output.stdout.is_empty());
    Ok(())
}
