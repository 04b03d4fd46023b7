use crate::cli::support::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_add_prints_id_and_title() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "Buy milk", "--body", "2%", "--tags", "shopping,home"])
        .assert()
        .success()
        .stdout("Added note id=1 title=Buy milk\n");

    env.cmd()
        .args(["add", "Walk dog"])
        .assert()
        .success()
        .stdout("Added note id=2 title=Walk dog\n");
}

#[test]
fn test_add_trims_title_in_output() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "  Padded  "])
        .assert()
        .success()
        .stdout("Added note id=1 title=Padded\n");
}

#[test]
fn test_add_short_flags_and_tag_cleanup() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "Errands", "-b", " list ", "-t", " a, ,b,"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(env.store_path()).unwrap()).unwrap();
    assert_eq!(value["next_id"], 2);
    assert_eq!(value["notes"][0]["body"], "list");
    assert_eq!(value["notes"][0]["tags"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_add_creates_store_directory() {
    let env = TestEnv::new();
    assert!(!env.store_path().exists());

    env.add(&["First"]);

    assert!(env.store_path().exists());
}

#[test]
fn test_add_requires_title() {
    let env = TestEnv::new();

    env.cmd()
        .arg("add")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<TITLE>"));
}
