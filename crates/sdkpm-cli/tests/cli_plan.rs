use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const UNIVERSE: &str = r#"
[[local]]
id = "tools"
version = "25.2.3"

[[remote]]
id = "tools"
version = "25.2.3"

[[remote]]
id = "platforms;android-23"
version = "3"
display-name = "Android SDK Platform 23"
dependencies = ["tools", { id = "platform-tools", min-version = "23" }]

[[remote]]
id = "platform-tools"
version = "23.1"
dependencies = ["build-tools"]

[[remote]]
id = "build-tools"
version = "23.0.1"

[[remote]]
id = "sources"
version = "1"
dependencies = [{ id = "tools", min-version = "30" }]

[[remote]]
id = "orphan"
version = "1"
dependencies = ["bogus"]
"#;

fn sdkpm_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sdkpm").unwrap();
    cmd.env("SDKPM_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write_universe(tmp: &TempDir) -> PathBuf {
    let path = tmp.path().join("universe.toml");
    fs::write(&path, UNIVERSE).unwrap();
    path
}

#[test]
fn test_plan_prints_dependency_first_order() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "platforms;android-23"])
        .assert()
        .success()
        .stdout(
            "build-tools 23.0.1\nplatform-tools 23.1.0\nplatforms;android-23 3.0.0\n",
        )
        .stderr(predicate::str::contains("3 package(s) to install"));
}

#[test]
fn test_plan_json_format() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "platform-tools", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"build-tools\""));
}

#[test]
fn test_plan_tree_and_why() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "platforms;android-23", "--tree"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("platforms;android-23 3.0.0\n"))
        .stdout(predicate::str::contains("└── platform-tools 23.1.0"))
        .stdout(predicate::str::contains("    └── build-tools 23.0.1"));

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "platforms;android-23", "--why", "build-tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path to build-tools:"))
        .stdout(predicate::str::contains("    build-tools 23.0.1"));
}

#[test]
fn test_plan_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);
    let out = tmp.path().join("plan.toml");

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "platform-tools", "--output"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("[[package]]"), "got: {content}");
    let build_tools = content.find("build-tools").unwrap();
    let platform_tools = content.find("id = \"platform-tools\"").unwrap();
    assert!(build_tools < platform_tools);
}

#[test]
fn test_plan_version_unavailable_fails() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "sources"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("warning"))
        .stderr(predicate::str::contains("with revision at least 30.0.0 not available."))
        .stderr(predicate::str::contains("Dependency resolution failed"));
}

#[test]
fn test_plan_missing_dependency_fails() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependant package with key bogus not found!"));
}

#[test]
fn test_plan_unknown_package_fails() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);

    sdkpm_cmd(tmp.path())
        .arg("--universe")
        .arg(&universe)
        .args(["plan", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No remote package 'nonexistent'"));
}

#[test]
fn test_plan_without_universe_fails() {
    let tmp = TempDir::new().unwrap();

    sdkpm_cmd(tmp.path())
        .args(["plan", "tools"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No universe file given"));
}

#[test]
fn test_plan_uses_configured_universe_and_format() {
    let tmp = TempDir::new().unwrap();
    let universe = write_universe(&tmp);
    fs::write(
        tmp.path().join("config.toml"),
        format!(
            "[universe]\npath = {:?}\n\n[output]\nformat = \"json\"\n",
            universe.display().to_string()
        ),
    )
    .unwrap();

    sdkpm_cmd(tmp.path())
        .args(["plan", "build-tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"package\""));
}
