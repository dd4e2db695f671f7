//! Integration tests for the lumiforge binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = "workspace \"$PROJECT_NAME\"\n";

/// Lay out a minimal but valid engine installation.
fn fake_engine(root: &Path) {
    std::fs::create_dir_all(root.join("Templates/Project")).unwrap();
    std::fs::write(
        root.join("Templates/Project/premake_solution_template.txt"),
        TEMPLATE,
    )
    .unwrap();
    std::fs::create_dir_all(root.join("Tools")).unwrap();
    std::fs::write(root.join("Tools/build.exe"), b"tool bytes").unwrap();
}

fn lumiforge() -> Command {
    let mut cmd = Command::cargo_bin("lumiforge").unwrap();
    // Isolate from the developer's environment.
    cmd.env_remove("LUMINA_DIR").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    lumiforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lumina project scaffolding"));
}

#[test]
fn version_flag() {
    lumiforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_creates_the_full_project() {
    let temp = TempDir::new().unwrap();
    let engine = temp.path().join("engine");
    let project = temp.path().join("proj");
    fake_engine(&engine);

    lumiforge()
        .env("LUMINA_DIR", &engine)
        .args(["new", "My Game", "--dir"])
        .arg(&project)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project created"));

    assert!(project.join("My_Game.lproject").is_file());
    let premake = std::fs::read_to_string(project.join("premake5.lua")).unwrap();
    assert!(premake.contains("workspace \"My_Game\""));
    assert!(project.join("Source/My_Game/My_Game.h").is_file());
    assert!(project.join("Source/My_Game/My_Game.cpp").is_file());
    assert!(project.join("Game/Content").is_dir());
    assert!(project.join("GenerateProject.py").is_file());
    assert_eq!(
        std::fs::read(project.join("Tools/build.exe")).unwrap(),
        b"tool bytes"
    );
}

#[test]
fn new_without_engine_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("proj");

    lumiforge()
        .args(["new", "Demo", "--yes", "--dir"])
        .arg(&project)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("LUMINA_DIR"));

    assert!(!project.exists());
}

#[test]
fn new_with_missing_template_reports_partial_failure() {
    let temp = TempDir::new().unwrap();
    let engine = temp.path().join("engine");
    let project = temp.path().join("proj");
    fake_engine(&engine);
    std::fs::remove_file(engine.join("Templates/Project/premake_solution_template.txt")).unwrap();

    lumiforge()
        .env("LUMINA_DIR", &engine)
        .args(["new", "Demo", "--yes", "--dir"])
        .arg(&project)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("step(s) failed"));

    // No rollback: everything except the build config is on disk.
    assert!(project.join("Demo.lproject").is_file());
    assert!(project.join("Source/Demo/Demo.h").is_file());
    assert!(!project.join("premake5.lua").exists());
}

#[test]
fn new_without_dir_flag_fails_off_tty() {
    let temp = TempDir::new().unwrap();
    let engine = temp.path().join("engine");
    fake_engine(&engine);

    lumiforge()
        .env("LUMINA_DIR", &engine)
        .args(["new", "Demo", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--dir"));
}

#[test]
fn new_json_report() {
    let temp = TempDir::new().unwrap();
    let engine = temp.path().join("engine");
    let project = temp.path().join("proj");
    fake_engine(&engine);

    let output = lumiforge()
        .env("LUMINA_DIR", &engine)
        .args(["new", "Demo", "--yes", "--output-format", "json", "--dir"])
        .arg(&project)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let start = text.find('[').expect("JSON array in stdout");
    let end = text.rfind(']').unwrap();
    let steps: serde_json::Value = serde_json::from_str(&text[start..=end]).unwrap();
    assert_eq!(steps.as_array().unwrap().len(), 7);
    assert!(
        steps
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["status"] == "completed")
    );
}

#[test]
fn engine_dir_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("good-engine");
    let project = temp.path().join("proj");
    fake_engine(&good);

    lumiforge()
        .env("LUMINA_DIR", temp.path().join("nonexistent"))
        .args(["new", "Demo", "--yes", "--engine-dir"])
        .arg(&good)
        .args(["--dir"])
        .arg(&project)
        .assert()
        .success();

    assert!(project.join("Demo.lproject").is_file());
}

#[test]
fn doctor_passes_on_complete_installation() {
    let temp = TempDir::new().unwrap();
    let engine = temp.path().join("engine");
    fake_engine(&engine);

    lumiforge()
        .env("LUMINA_DIR", &engine)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("looks complete"));
}

#[test]
fn doctor_fails_on_incomplete_installation() {
    let temp = TempDir::new().unwrap();
    let engine = temp.path().join("engine");
    fake_engine(&engine);
    std::fs::remove_dir_all(engine.join("Tools")).unwrap();

    lumiforge()
        .env("LUMINA_DIR", &engine)
        .arg("doctor")
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn shell_completions() {
    lumiforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lumiforge"));
}
