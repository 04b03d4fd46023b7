use crate::cli::support::TestEnv;

#[test]
fn test_list_empty_store() {
    let env = TestEnv::new();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("No notes yet.\n");
}

#[test]
fn test_list_in_insertion_order() {
    let env = TestEnv::new();
    env.add(&["Buy milk", "--tags", "shopping,home"]);
    env.add(&["Walk dog"]);

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("[1] Buy milk (shopping, home)\n[2] Walk dog ()\n");
}

#[test]
fn test_list_filters_by_exact_tag() {
    let env = TestEnv::new();
    env.add(&["Buy milk", "--tags", "shopping,home"]);
    env.add(&["Fix sink", "--tags", "homework"]);
    env.add(&["Walk dog"]);

    env.cmd()
        .args(["list", "--tags", "home"])
        .assert()
        .success()
        .stdout("[1] Buy milk (shopping, home)\n");
}

#[test]
fn test_list_filter_without_matches() {
    let env = TestEnv::new();
    env.add(&["Walk dog"]);

    env.cmd()
        .args(["list", "--tags", "missing"])
        .assert()
        .success()
        .stdout("No notes yet.\n");
}
