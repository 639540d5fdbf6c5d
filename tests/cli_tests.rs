// tests/cli_tests.rs
//
// Argument handling only; nothing here reaches the network.
//
use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pydoc_scrape").unwrap()
}

#[test]
fn help_lists_modes() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("whats-new"))
        .stdout(predicate::str::contains("latest-versions"))
        .stdout(predicate::str::contains("download"))
        .stdout(predicate::str::contains("pep"));
}

#[test]
fn mode_is_required() {
    cmd().assert().failure().stderr(predicate::str::contains("<MODE>"));
}

#[test]
fn unknown_mode_is_rejected() {
    cmd()
        .arg("changelog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn console_is_not_an_output_choice() {
    cmd()
        .args(["pep", "--output", "console"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pretty"));
}
