use crate::cli::support::TestEnv;
use predicates::prelude::*;

#[test]
fn test_view_existing_note() {
    let env = TestEnv::new();
    env.add(&["Buy milk", "--body", "2%", "--tags", "shopping,home"]);

    env.cmd()
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Buy milk (id=1)\ncreated: "))
        .stdout(predicate::str::contains("Z\ntags: shopping, home\n\n2%\n"));
}

#[test]
fn test_view_missing_note_exits_one() {
    let env = TestEnv::new();

    env.cmd()
        .args(["view", "7"])
        .assert()
        .code(1)
        .stdout("Note 7 not found\n");
}

#[test]
fn test_view_rejects_non_integer_id() {
    let env = TestEnv::new();

    env.cmd().args(["view", "seven"]).assert().code(2);
}
