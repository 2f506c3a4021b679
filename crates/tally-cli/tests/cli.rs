// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    Command::cargo_bin("tally").expect("tally binary should be built")
}

fn expected_line() -> String {
    let pairs: Vec<String> = (-10i64..=10)
        .map(|x| format!("[{}, {}]", x, 2 * x))
        .collect();
    format!("[{}]\n", pairs.join(", "))
}

#[test]
fn cli_prints_doubled_pairs() {
    tally()
        .env_remove("TALLY_LOG")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_line()))
        .stderr(predicate::str::is_empty());
}

#[test]
fn cli_output_is_one_line_of_21_pairs() {
    let output = tally().env_remove("TALLY_LOG").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(stdout.matches("], [").count(), 20);
    assert!(stdout.starts_with("[[-10, -20], [-9, -18]"));
    assert!(stdout.ends_with("[9, 18], [10, 20]]\n"));
}

#[test]
fn cli_debug_logging_keeps_stdout_clean() {
    tally()
        .env("TALLY_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_line()))
        .stderr(predicate::str::contains("computed ideal sequence"));
}

#[test]
fn cli_invalid_log_filter_falls_back() {
    tally()
        .env("TALLY_LOG", "tally=notalevel")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_line()));
}
