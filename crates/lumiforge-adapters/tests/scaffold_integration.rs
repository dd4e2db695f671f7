//! End-to-end scaffolding tests against both filesystem adapters.

use std::path::Path;

use lumiforge_adapters::{LocalFilesystem, MemoryFilesystem};
use lumiforge_core::prelude::*;

const TEMPLATE: &str = "workspace \"$PROJECT_NAME\"\n    startproject \"$PROJECT_NAME\"\n";

fn seeded_engine(fs: &MemoryFilesystem) -> EngineContext {
    fs.seed_file(
        "/engine/Templates/Project/premake_solution_template.txt",
        TEMPLATE,
    );
    fs.seed_file("/engine/Tools/build.exe", "tool-bytes");
    EngineContext::new("/engine").unwrap()
}

#[test]
fn full_run_produces_every_artifact() {
    let fs = MemoryFilesystem::new();
    let engine = seeded_engine(&fs);

    let scaffolder = ProjectScaffolder::new(Box::new(fs.clone()));
    let report = scaffolder
        .create_project(&engine, Path::new("/projects/demo"), "My Game")
        .unwrap();

    assert!(report.is_success(), "report: {report:?}");

    assert_eq!(
        fs.read_file(Path::new("/projects/demo/My_Game.lproject")),
        Some("Testing".to_string())
    );
    let premake = fs
        .read_file(Path::new("/projects/demo/premake5.lua"))
        .unwrap();
    assert!(premake.contains("workspace \"My_Game\""));
    assert!(!premake.contains("$PROJECT_NAME"));

    let header = fs
        .read_file(Path::new("/projects/demo/Source/My_Game/My_Game.h"))
        .unwrap();
    assert!(header.contains("class FMy_Game"));

    let source = fs
        .read_file(Path::new("/projects/demo/Source/My_Game/My_Game.cpp"))
        .unwrap();
    assert!(source.contains("IMPLEMENT_MODULE(FMy_Game, \"My_Game\")"));

    assert!(fs.exists(Path::new("/projects/demo/Game/Content")));
    assert!(fs.exists(Path::new("/projects/demo/GenerateProject.py")));
    assert_eq!(
        fs.read_file(Path::new("/projects/demo/Tools/build.exe")),
        Some("tool-bytes".to_string())
    );
}

#[test]
fn missing_engine_dir_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let engine = EngineContext::new("/engine").unwrap(); // never seeded

    let scaffolder = ProjectScaffolder::new(Box::new(fs.clone()));
    let err = scaffolder
        .create_project(&engine, Path::new("/projects/demo"), "Demo")
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::PreconditionMissing { .. }));
    assert!(fs.is_empty(), "no file may be created: {:?}", fs.list_files());
}

#[test]
fn empty_name_is_fatal_before_any_mutation() {
    let fs = MemoryFilesystem::new();
    let engine = seeded_engine(&fs);
    let files_before = fs.list_files();

    let scaffolder = ProjectScaffolder::new(Box::new(fs.clone()));
    let err = scaffolder
        .create_project(&engine, Path::new("/projects/demo"), "   ")
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidProjectName { .. }));
    assert_eq!(fs.list_files(), files_before);
}

#[test]
fn missing_template_fails_only_the_build_config_step() {
    let fs = MemoryFilesystem::new();
    // Engine exists but has no solution template.
    fs.seed_file("/engine/Tools/build.exe", "tool-bytes");
    let engine = EngineContext::new("/engine").unwrap();

    let scaffolder = ProjectScaffolder::new(Box::new(fs.clone()));
    let report = scaffolder
        .create_project(&engine, Path::new("/projects/demo"), "Demo")
        .unwrap();

    assert!(!report.is_success());
    assert_eq!(report.failure_count(), 1);
    let (step, err) = report.failures().next().unwrap();
    assert_eq!(step, ScaffoldStep::BuildConfig);
    assert!(matches!(err, ScaffoldError::TemplateNotFound { .. }));

    // Earlier and later artifacts remain on disk - no rollback.
    assert!(fs.exists(Path::new("/projects/demo/Demo.lproject")));
    assert!(fs.exists(Path::new("/projects/demo/Source/Demo/Demo.h")));
    assert!(fs.exists(Path::new("/projects/demo/Source/Demo/Demo.cpp")));
    assert!(fs.exists(Path::new("/projects/demo/GenerateProject.py")));
    assert!(fs.exists(Path::new("/projects/demo/Tools/build.exe")));
    assert!(!fs.exists(Path::new("/projects/demo/premake5.lua")));
}

#[test]
fn header_write_failure_does_not_stop_the_source_write() {
    let fs = MemoryFilesystem::new();
    let engine = seeded_engine(&fs);
    fs.poison("/projects/demo/Source/Demo/Demo.h");

    let scaffolder = ProjectScaffolder::new(Box::new(fs.clone()));
    let report = scaffolder
        .create_project(&engine, Path::new("/projects/demo"), "Demo")
        .unwrap();

    assert!(!report.is_success());
    let failed: Vec<_> = report.failures().map(|(s, _)| s).collect();
    assert_eq!(failed, vec![ScaffoldStep::ModuleHeader]);
    assert!(fs.exists(Path::new("/projects/demo/Source/Demo/Demo.cpp")));
}

#[test]
fn rerun_over_existing_project_overwrites_files_but_fails_tools_copy() {
    // Overwrite-without-warning is the preserved baseline contract; the
    // tools copy is the only step that refuses an existing destination.
    let fs = MemoryFilesystem::new();
    let engine = seeded_engine(&fs);
    let scaffolder = ProjectScaffolder::new(Box::new(fs.clone()));

    let first = scaffolder
        .create_project(&engine, Path::new("/projects/demo"), "Demo")
        .unwrap();
    assert!(first.is_success());

    let second = scaffolder
        .create_project(&engine, Path::new("/projects/demo"), "Demo")
        .unwrap();
    assert!(!second.is_success());
    let failed: Vec<_> = second.failures().map(|(s, _)| s).collect();
    assert_eq!(failed, vec![ScaffoldStep::ToolsCopy]);
}

// ── LocalFilesystem end-to-end (spec acceptance scenario) ────────────────────

#[test]
fn local_filesystem_end_to_end() {
    let tmp = tempfile::TempDir::new().unwrap();
    let engine_root = tmp.path().join("engine");
    let project_root = tmp.path().join("projects").join("my-game");

    std::fs::create_dir_all(engine_root.join("Templates/Project")).unwrap();
    std::fs::write(
        engine_root.join("Templates/Project/premake_solution_template.txt"),
        TEMPLATE,
    )
    .unwrap();
    std::fs::create_dir_all(engine_root.join("Tools")).unwrap();
    std::fs::write(engine_root.join("Tools/build.exe"), b"\x4d\x5a tool").unwrap();

    let engine = EngineContext::new(&engine_root).unwrap();
    let scaffolder = ProjectScaffolder::new(Box::new(LocalFilesystem::new()));
    let report = scaffolder
        .create_project(&engine, &project_root, "My Game")
        .unwrap();
    assert!(report.is_success(), "report: {report:?}");

    assert!(project_root.join("My_Game.lproject").is_file());
    let premake = std::fs::read_to_string(project_root.join("premake5.lua")).unwrap();
    assert!(premake.contains("My_Game"));
    assert!(project_root.join("Source/My_Game/My_Game.h").is_file());
    assert!(project_root.join("Source/My_Game/My_Game.cpp").is_file());
    assert!(project_root.join("Game/Content").is_dir());
    assert!(project_root.join("GenerateProject.py").is_file());
    assert_eq!(
        std::fs::read(project_root.join("Tools/build.exe")).unwrap(),
        std::fs::read(engine_root.join("Tools/build.exe")).unwrap()
    );
}

#[test]
fn ensure_project_tree_is_idempotent_on_disk() {
    let tmp = tempfile::TempDir::new().unwrap();
    let fs = LocalFilesystem::new();
    let spec = ProjectSpec::new("Demo", tmp.path().join("proj")).unwrap();

    lumiforge_core::scaffold::ensure_project_tree(&fs, &spec).unwrap();
    lumiforge_core::scaffold::ensure_project_tree(&fs, &spec).unwrap();

    assert!(tmp.path().join("proj/Source/Demo").is_dir());
    assert!(tmp.path().join("proj/Game/Content").is_dir());
}
