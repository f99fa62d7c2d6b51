//! End-to-end checks running the compiled `outcome_demo` binary.

use assert_cmd::Command;
use rstest::rstest;

fn demo() -> Command {
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("outcome_demo").expect("binary should exist");
    for key in [
        "OUTCOME_DEMO_VALUE",
        "OUTCOME_DEMO_MESSAGE",
        "OUTCOME_DEMO_REPLACEMENT",
        "OUTCOME_DEMO_REPAIR_MESSAGE",
        "OUTCOME_DEMO_VERBOSE",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[rstest]
fn prints_walkthrough_with_defaults() {
    let assert = demo().assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.starts_with("Original value(s) for\n`result`: 1 // \"false\"\n"));
    assert!(stdout.ends_with("is ok // is err => true // false\n"));
}

#[rstest]
fn environment_supplies_options() {
    let assert = demo()
        .env("OUTCOME_DEMO_VALUE", "12")
        .env("OUTCOME_DEMO_MESSAGE", "from env")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("`result`: 12 // \"from env\"\n"));
}

#[rstest]
fn flag_overrides_environment() {
    let assert = demo()
        .env("OUTCOME_DEMO_REPLACEMENT", "5")
        .args(["--replacement", "6"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("`result`: 6 // \"True\"\n"));
}

#[rstest]
fn blank_repair_message_fails() {
    let assert = demo()
        .env("RUST_BACKTRACE", "0")
        .args(["--repair-message", " "])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("--repair-message must contain visible characters"));
}
