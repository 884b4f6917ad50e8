//! Error handling integration tests for the copyfile CLI.
//!
//! These tests verify:
//! - Usage errors exit with status 2, print usage and touch nothing
//! - I/O errors exit with status 1 and carry the OS error description
//! - Multi-file copies stop at the first failure without rollback

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case::no_arguments(&[])]
#[case::no_mode(&["a.txt", "b.txt"])]
#[case::verbose_only(&["-v", "a.txt", "b.txt"])]
#[case::unknown_flag(&["-x", "a.txt", "b.txt"])]
#[case::conflicting_modes(&["-f", "-d", "a.txt", "b.txt"])]
#[case::file_missing_target(&["-f", "a.txt"])]
#[case::file_too_many(&["-f", "a.txt", "b.txt", "c.txt"])]
#[case::multiple_missing_target(&["-m", "a.txt"])]
#[case::directory_missing_target(&["-d", "a"])]
#[case::directory_nothing(&["-d"])]
fn test_usage_errors(#[case] args: &[&str]) {
    let fx = TestFixture::new();
    fx.source_file("a.txt", "a");
    fx.source_file("a/inner.txt", "inner");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.current_dir(fx.src.path())
        .args(args)
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(fx.entry_names(fx.src.path()), ["a", "a.txt"]);
}

#[test]
fn test_source_not_found() {
    let fx = TestFixture::new();
    let dst = fx.target("file.txt");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-f")
        .arg("/nonexistent/path/file.txt")
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[source_not_found]"))
        .stderr(predicate::str::contains("/nonexistent/path/file.txt"));

    assert!(!dst.exists());
}

#[test]
fn test_target_parent_missing() {
    let fx = TestFixture::new();
    let src = fx.source_file("a.txt", "a");
    let dst = fx.target("no/such/dir/a.txt");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-f")
        .arg(&src)
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error opening target file"));
}

#[test]
fn test_file_mode_rejects_directory_source() {
    let fx = TestFixture::new();
    fx.source_file("dir/inner.txt", "inner");
    let dst = fx.target("copy");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-f")
        .arg(fx.src.path().join("dir"))
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is_a_directory"));

    assert!(!dst.exists());
}

#[test]
fn test_multiple_stops_at_first_failure() {
    let fx = TestFixture::new();
    let first = fx.source_file("first.txt", "1");
    let missing = fx.src.path().join("missing.txt");
    let last = fx.source_file("last.txt", "3");
    let out = fx.target("out");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-m")
        .arg(&first)
        .arg(&missing)
        .arg(&last)
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));

    assert_eq!(fx.entry_names(&out), ["first.txt"]);
}

#[cfg(unix)]
#[test]
fn test_target_directory_under_file_fails() {
    let fx = TestFixture::new();
    let src = fx.source_file("a.txt", "a");
    let blocker = fx.target("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-m")
        .arg(&src)
        .arg(blocker.join("out"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error creating target directory"));
}
