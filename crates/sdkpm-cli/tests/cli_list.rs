use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const UNIVERSE: &str = r#"
[[local]]
id = "tools"
version = "24"

[[remote]]
id = "tools"
version = "25.2.3"

[[local]]
id = "emulator"
version = "2"

[[remote]]
id = "emulator"
version = "2"

[[remote]]
id = "platform-tools"
version = "23.1"
"#;

fn sdkpm_cmd(tmp: &TempDir) -> Command {
    let universe = tmp.path().join("universe.toml");
    fs::write(&universe, UNIVERSE).unwrap();
    let mut cmd = Command::cargo_bin("sdkpm").unwrap();
    cmd.env("SDKPM_HOME", tmp.path())
        .arg("--universe")
        .arg(universe);
    cmd
}

#[test]
fn test_list_shows_all_packages() {
    let tmp = TempDir::new().unwrap();

    sdkpm_cmd(&tmp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("emulator"))
        .stdout(predicate::str::contains("platform-tools"))
        .stdout(predicate::str::contains("25.2.3"));
}

#[test]
fn test_list_updates_only() {
    let tmp = TempDir::new().unwrap();

    sdkpm_cmd(&tmp)
        .args(["list", "--updates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tools"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("emulator").not());
}

#[test]
fn test_list_bad_universe_fails() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("bad.toml");
    fs::write(&bad, "[[remote]]\nid = \"x\"\nversion = \"one\"\n").unwrap();

    Command::cargo_bin("sdkpm")
        .unwrap()
        .env("SDKPM_HOME", tmp.path())
        .arg("--universe")
        .arg(&bad)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Universe error"));
}
