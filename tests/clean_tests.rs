use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_clean_removes_blank_content_file() {
    let temp = TempDir::new().unwrap();
    // Four header lines, then only whitespace content.
    let path = write_file(temp.path(), "b.tdf.txt", "h\nfont: X\n0\n0\n   \n\n");

    Command::cargo_bin("tdfkit").unwrap()
        .arg("clean")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing b.tdf.txt (all content lines are empty)"))
        .stdout(predicate::str::contains("Removed 1 files with empty content"))
        .stdout(predicate::str::contains("Remaining files: 0"));

    assert!(!path.exists(), "blank preview should have been deleted");
}

#[test]
fn test_clean_keeps_file_with_real_content() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "c.tdf.txt", "h\nfont: X\n0\n0\n   \nx\n");

    Command::cargo_bin("tdfkit").unwrap()
        .arg("clean")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 files with empty content"))
        .stdout(predicate::str::contains("Remaining files: 1"));

    assert!(path.exists(), "non-blank preview must survive");
}

#[test]
fn test_clean_removes_header_only_and_truncated_files() {
    let temp = TempDir::new().unwrap();
    // Exactly four lines: the content region is empty.
    let four = write_file(temp.path(), "four.tdf.txt", "a\nb\nc\nd\n");
    // Shorter than the header convention.
    let two = write_file(temp.path(), "two.tdf.txt", "a\nb\n");
    let empty = write_file(temp.path(), "empty.tdf.txt", "");

    Command::cargo_bin("tdfkit").unwrap()
        .arg("clean")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 3 files with empty content"))
        .stdout(predicate::str::contains("Remaining files: 0"));

    assert!(!four.exists());
    assert!(!two.exists());
    assert!(!empty.exists());
}

#[test]
fn test_clean_only_touches_matching_suffix() {
    let temp = TempDir::new().unwrap();
    let blank_art = write_file(temp.path(), "gone.tdf.txt", "a\nb\nc\nd\n\n");
    let other = write_file(temp.path(), "keep.txt", "a\nb\nc\nd\n\n");

    Command::cargo_bin("tdfkit").unwrap()
        .arg("clean")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 files with empty content"));

    assert!(!blank_art.exists());
    assert!(other.exists(), "non-preview files are out of scope");
}

#[test]
fn test_clean_skips_unreadable_file_and_continues() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("bad.tdf.txt");
    fs::write(&bad, b"\xff\xfe not utf-8").unwrap();
    let blank = write_file(temp.path(), "blank.tdf.txt", "a\nb\nc\nd\n   \n");

    Command::cargo_bin("tdfkit").unwrap()
        .arg("clean")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing bad.tdf.txt"))
        .stdout(predicate::str::contains("Removed 1 files with empty content"))
        .stdout(predicate::str::contains("Remaining files: 1"));

    assert!(bad.exists(), "unreadable file is skipped, not deleted");
    assert!(!blank.exists());
}

#[test]
fn test_clean_counts_mixed_gallery() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "art1.tdf.txt", "h\nfont: A\n0\n0\n###\n");
    write_file(temp.path(), "blank1.tdf.txt", "h\nfont: B\n0\n0\n\n\n");
    write_file(temp.path(), "blank2.tdf.txt", "h\nfont: C\n0\n0\n \t \n");
    write_file(temp.path(), "art2.tdf.txt", "h\nfont: D\n0\n0\n@\n");

    Command::cargo_bin("tdfkit").unwrap()
        .arg("clean")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing blank1.tdf.txt"))
        .stdout(predicate::str::contains("Removing blank2.tdf.txt"))
        .stdout(predicate::str::contains("Removed 2 files with empty content"))
        .stdout(predicate::str::contains("Remaining files: 2"));
}

#[test]
fn test_clean_fails_on_missing_directory() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-such-gallery");

    Command::cargo_bin("tdfkit").unwrap()
        .arg("clean")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
