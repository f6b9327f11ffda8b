//! End-to-end runs of the newfile-transfer binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn write_config(dir: &Path) {
    fs::write(
        dir.join("newfile-transfer.toml"),
        r#"
manifest = "files.json"
destination = "out"
folders = ["inbox"]

[monitor]
warmupMs = 0
pollIntervalMs = 20
"#,
    )
    .unwrap();
}

fn setup(manifest: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_config(dir.path());
    fs::create_dir(dir.path().join("inbox")).unwrap();
    fs::write(dir.path().join("files.json"), manifest).unwrap();
    dir
}

fn run(dir: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_newfile-transfer"))
        .args(["--no-progress"])
        .args(extra)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn run_with_input(dir: &Path, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_newfile-transfer"))
        .arg("--no-progress")
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_no_new_files_exits_without_prompting() {
    let dir = setup("[]");

    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No new files!"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_transfer_copies_new_files_and_records_them() {
    let dir = setup(r#"["a.txt"]"#);
    fs::write(dir.path().join("inbox/a.txt"), "old").unwrap();
    fs::write(dir.path().join("inbox/b.txt"), "brand new").unwrap();
    fs::create_dir_all(dir.path().join("inbox/album")).unwrap();
    fs::write(dir.path().join("inbox/album/track.flac"), "music").unwrap();

    let output = run(dir.path(), &["--yes"]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("newfile-transfer.toml"));
    assert!(stdout.contains("Copying directory: \"album\""));
    assert!(stdout.contains("Copying file: \"b.txt\""));
    assert!(stdout.contains("(1 file, 0.0 MB)"));
    assert_eq!(
        fs::read_to_string(dir.path().join("out/b.txt")).unwrap(),
        "brand new"
    );
    assert!(dir.path().join("out/album/track.flac").is_file());
    assert!(!dir.path().join("out/a.txt").exists());

    let manifest: Vec<String> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("files.json")).unwrap()).unwrap();
    assert_eq!(manifest, ["a.txt", "album", "b.txt"]);

    // Second run finds nothing
    let output = run(dir.path(), &[]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No new files!"));
}

#[test]
fn test_list_does_not_copy() {
    let dir = setup("[]");
    fs::write(dir.path().join("inbox/c.txt"), "c").unwrap();
    let before = fs::read(dir.path().join("files.json")).unwrap();

    let output = run(dir.path(), &["--list"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("c.txt"));
    assert!(!dir.path().join("out").exists());
    assert_eq!(fs::read(dir.path().join("files.json")).unwrap(), before);
}

#[test]
fn test_declined_prompt_leaves_manifest_unchanged() {
    let dir = setup(r#"["a.txt"]"#);
    fs::write(dir.path().join("inbox/d.txt"), "d").unwrap();
    let before = fs::read(dir.path().join("files.json")).unwrap();

    let output = run_with_input(dir.path(), "n\n");

    assert!(output.status.success(), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("No files copied."));
    assert!(!dir.path().join("out").exists());
    assert_eq!(fs::read(dir.path().join("files.json")).unwrap(), before);
}

#[test]
fn test_closed_stdin_counts_as_declined() {
    let dir = setup("[]");
    fs::write(dir.path().join("inbox/e.txt"), "e").unwrap();
    let before = fs::read(dir.path().join("files.json")).unwrap();

    // `output()` gives the child a null stdin
    let output = run(dir.path(), &[]);

    assert!(output.status.success(), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("No files copied."));
    assert!(!dir.path().join("out").exists());
    assert_eq!(fs::read(dir.path().join("files.json")).unwrap(), before);
}

#[test]
fn test_confirmed_prompt_copies() {
    let dir = setup("[]");
    fs::write(dir.path().join("inbox/f.txt"), "fresh").unwrap();

    let output = run_with_input(dir.path(), "y\n");

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Copying file"));
    assert!(stdout.contains("Done!"));
    assert_eq!(
        fs::read_to_string(dir.path().join("out/f.txt")).unwrap(),
        "fresh"
    );
    let manifest: Vec<String> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("files.json")).unwrap()).unwrap();
    assert_eq!(manifest, ["f.txt"]);
}

#[test]
fn test_missing_manifest_fails() {
    let dir = setup("[]");
    fs::remove_file(dir.path().join("files.json")).unwrap();

    let output = run(dir.path(), &["--yes"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read manifest"));
}
