use crate::cli::support::TestEnv;

#[test]
fn test_delete_then_delete_again() {
    let env = TestEnv::new();
    env.add(&["Buy milk"]);
    env.add(&["Walk dog"]);

    env.cmd()
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout("Deleted.\n");

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("[2] Walk dog ()\n");

    env.cmd()
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout("Note not found.\n");
}

#[test]
fn test_ids_not_reused_after_delete() {
    let env = TestEnv::new();
    env.add(&["One"]);
    env.cmd().args(["delete", "1"]).assert().success();

    env.cmd()
        .args(["add", "Two"])
        .assert()
        .success()
        .stdout("Added note id=2 title=Two\n");
}
