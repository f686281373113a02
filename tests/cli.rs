use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn advent() -> Command {
    let mut cmd = Command::cargo_bin("advent").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

#[test]
fn solves_puzzle_from_input_dir() {
    advent()
        .args(["2017", "1", "--input-dir", "tests/input"])
        .assert()
        .success()
        .stdout("0\n6\n");
}

#[test]
fn solves_puzzle_from_input_file() {
    let dir = std::env::temp_dir().join(format!("adventkit-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("captcha.txt");
    fs::write(&input, "91212129\n").unwrap();

    advent()
        .args(["2017", "01", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout("9\n6\n");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rejects_malformed_arguments() {
    advent()
        .args(["19", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid year"));
    advent()
        .args(["2019", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid day"));
    advent().arg("2019").assert().failure();
}

#[test]
fn fails_for_unknown_puzzles() {
    advent()
        .args(["1999", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no solvers for year 1999"));
    advent()
        .args(["2019", "25"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("can't find solver for year 2019, day 25"));
}

#[test]
fn fails_for_missing_input() {
    advent()
        .args(["2017", "02", "--input-dir", "tests/input"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read puzzle input"));
}

#[test]
fn fails_for_non_ascii_input() {
    let dir = std::env::temp_dir().join(format!("adventkit-ascii-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("captcha.txt");
    fs::write(&input, "12é12\n").unwrap();

    advent()
        .args(["2017", "01", "--input"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-ASCII"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn fails_when_solver_fails() {
    let dir = std::env::temp_dir().join(format!("adventkit-bad-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("captcha.txt");
    fs::write(&input, "12x12\n").unwrap();

    advent()
        .args(["2017", "01", "--input"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("d01_inverse_captcha"));
    fs::remove_dir_all(&dir).unwrap();
}
