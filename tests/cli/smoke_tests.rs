use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn typed_read() -> Command {
    Command::new(env!("CARGO_BIN_EXE_typed_read"))
}

#[test]
fn shows_help() {
    typed_read()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("typed_read"));
}

#[test]
fn reads_first_line() {
    let file = fixture("alpha\nbeta\n");
    typed_read()
        .arg(file.path())
        .arg("line")
        .assert()
        .success()
        .stdout("alpha\n");
}

#[test]
fn reads_integer_as_json() {
    let file = fixture("123abc");
    typed_read()
        .args(["--format", "json"])
        .arg(file.path())
        .args(["int", "4"])
        .assert()
        .success()
        .stdout("{\"command\":\"int\",\"value\":123}\n");
}

#[test]
fn scans_every_line() {
    let file = fixture("a 1\nb 2\n");
    typed_read()
        .arg(file.path())
        .args(["scan", "%s %d", "--all"])
        .assert()
        .success()
        .stdout("a\t1\nb\t2\n");
}

#[test]
fn read_all_from_offset() {
    let file = fixture("0123456789");
    typed_read()
        .arg(file.path())
        .args(["all", "--offset", "6"])
        .assert()
        .success()
        .stdout("6789");
}

#[test]
fn deferred_open_still_reads() {
    let file = fixture("x");
    typed_read()
        .arg("--defer")
        .arg(file.path())
        .arg("char")
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn missing_file_fails_with_code_1() {
    let dir = tempfile::tempdir().unwrap();
    typed_read()
        .arg(dir.path().join("nope.txt"))
        .arg("eof")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error[1]"))
        .stderr(predicate::str::contains("does not exist."));
}

#[test]
fn write_mode_fails_with_code_0() {
    let file = fixture("x");
    typed_read()
        .args(["--mode", "w"])
        .arg(file.path())
        .arg("eof")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error[0]"))
        .stderr(predicate::str::contains("Only rb are supported."));
}

#[test]
fn negative_length_fails_with_code_2() {
    let file = fixture("x");
    typed_read()
        .arg(file.path())
        .args(["read", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error[2]"))
        .stderr(predicate::str::contains("Length must be greater than 0, given -1."));
}

#[test]
fn exclusive_lock_is_refused() {
    let file = fixture("x");
    typed_read()
        .args(["--lock", "exclusive"])
        .arg(file.path())
        .arg("eof")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error[14]"));
}
