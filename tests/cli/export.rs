use crate::cli::support::TestEnv;
use std::fs;

#[test]
fn test_export_markdown_default() {
    let env = TestEnv::new();
    env.add(&["Buy milk", "--body", "2%", "--tags", "shopping,home"]);
    env.add(&["Walk dog"]);
    let out = env.root().join("notes.md");

    env.cmd()
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(format!("Exported {}\n", out.display()));

    let md = fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# Buy milk (id=1)\n_created: "));
    assert!(md.contains("Z_\n\n**tags:** shopping, home\n\n2%\n\n---\n\n# Walk dog (id=2)\n"));
    assert!(md.ends_with("Z_\n\n\n\n---\n\n"));
}

#[test]
fn test_export_json_round_trips_store_notes() {
    let env = TestEnv::new();
    env.add(&["Buy milk", "--body", "2%", "--tags", "shopping,home"]);
    env.add(&["Walk dog"]);
    let out = env.root().join("notes.json.out");

    env.cmd()
        .arg("export")
        .arg(&out)
        .args(["--format", "json"])
        .assert()
        .success();

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(env.store_path()).unwrap()).unwrap();
    assert_eq!(exported.as_object().unwrap().len(), 1);
    assert_eq!(exported["notes"], stored["notes"]);
}

#[test]
fn test_export_rejects_unknown_format() {
    let env = TestEnv::new();
    let out = env.root().join("notes.pdf");

    env.cmd()
        .arg("export")
        .arg(&out)
        .args(["--format", "pdf"])
        .assert()
        .code(2);

    assert!(!out.exists());
}

#[test]
fn test_export_into_missing_directory_fails() {
    let env = TestEnv::new();
    let out = env.root().join("no-such-dir").join("notes.md");

    env.cmd().arg("export").arg(&out).assert().code(1);
}
