//! Single-file mode integration tests for the copyfile CLI.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestFixture, patterned_bytes};
use predicates::prelude::*;
use rstest::rstest;
use std::fs;

#[rstest]
#[case::empty(0)]
#[case::one_byte(1)]
#[case::just_under_buffer(4095)]
#[case::exact_buffer(4096)]
#[case::two_buffers(8192)]
#[case::uneven(3 * 4096 + 123)]
#[case::large(1024 * 1024 + 7)]
fn test_file_copy_is_byte_identical(#[case] len: usize) {
    let fx = TestFixture::new();
    let content = patterned_bytes(len);
    let src = fx.source_file("input.bin", &content);
    let dst = fx.target("output.bin");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-f").arg(&src).arg(&dst).assert().success();

    assert_eq!(fs::read(&dst).unwrap(), content);
}

#[test]
fn test_file_copy_is_silent_without_verbose() {
    let fx = TestFixture::new();
    let src = fx.source_file("test.txt", "hello world");
    let dst = fx.target("test.txt");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-f")
        .arg(&src)
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    fx.assert_file_content(&dst, "hello world");
}

#[test]
fn test_overwrite_existing_file_entirely() {
    let fx = TestFixture::new();
    let src = fx.source_file("test.txt", "new");
    let dst = fx.target("test.txt");
    fs::write(&dst, "old content which is longer").unwrap();

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-f").arg(&src).arg(&dst).assert().success();

    fx.assert_file_content(&dst, "new");
}

#[test]
fn test_long_flag_form() {
    let fx = TestFixture::new();
    let src = fx.source_file("test.txt", "content");
    let dst = fx.target("copy.txt");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("--file").arg(&src).arg(&dst).assert().success();

    fx.assert_file_content(&dst, "content");
}

#[cfg(unix)]
#[test]
fn test_target_mode_is_fixed() {
    use std::os::unix::fs::PermissionsExt;

    let fx = TestFixture::new();
    let src = fx.source_file("run.sh", "#!/bin/sh\n");
    fs::set_permissions(&src, fs::Permissions::from_mode(0o700)).unwrap();
    let dst = fx.target("run.sh");

    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("-f").arg(&src).arg(&dst).assert().success();

    let mode = fs::metadata(&dst).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("copyfile"))
        .stdout(predicate::str::contains("--directory"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("copyfile");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("copyfile"));
}
