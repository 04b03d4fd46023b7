use crate::cli::support::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_store_env_var() {
    let env = TestEnv::new();

    env.bare_cmd()
        .env("SNAPNOTES_STORE", env.store_path())
        .args(["add", "From env"])
        .assert()
        .success();

    assert!(env.store_path().exists());
}

#[test]
fn test_config_file_store_path_and_export_format() {
    let env = TestEnv::new();
    let store = env.root().join("configured").join("notes.json");
    fs::create_dir_all(env.config_dir()).unwrap();
    fs::write(
        env.config_dir().join("config.toml"),
        format!(
            "store_path = {:?}\ndefault_export_format = \"json\"\n",
            store.display().to_string()
        ),
    )
    .unwrap();

    env.bare_cmd().args(["add", "Configured"]).assert().success();
    assert!(store.exists());

    let out = env.root().join("out");
    env.bare_cmd().arg("export").arg(&out).assert().success();
    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported["notes"][0]["title"], "Configured");
}

#[test]
fn test_invalid_config_is_reported() {
    let env = TestEnv::new();
    fs::create_dir_all(env.config_dir()).unwrap();
    fs::write(env.config_dir().join("config.toml"), "store_path = [").unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config"));
}
