use std::fs;
use std::path::Path;
use std::process::Command;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;
use vbump_operations::OperationError;
use vbump_operations::operations::{BumpInput, BumpOperation, BumpOutput};
use vbump_operations::providers::{FileSystemProjectProvider, FileSystemVersionWriter, Git2Provider};
use vbump_project::ConfigOverrides;
use vbump_version::{BumpMode, SemanticVersion};

const PYPROJECT: &str = r#"[project]
name = "asf-example"
version = "0.0.1-dev24"

[tool.vbump]
project = "asf-example"

[tool.uv]
exclude-newer = "2024-01-01T00:00:00Z"
"#;

const INIT_PY: &str = r#"from typing import Final

PROJECT: Final[str] = "asf-example"
# This is automatically updated
VERSION: Final[str] = "0.0.1-dev24"
"#;

fn create_python_project() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");

    fs::write(dir.path().join("pyproject.toml"), PYPROJECT).expect("write pyproject.toml");
    fs::create_dir_all(dir.path().join("src/asf/example")).expect("create package dir");
    fs::write(dir.path().join("src/asf/example/__init__.py"), INIT_PY).expect("write __init__.py");

    dir
}

fn init_git_repo(dir: &TempDir) {
    Command::new("git")
        .args(["init"])
        .current_dir(dir.path())
        .output()
        .expect("git init");

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(dir.path())
        .output()
        .expect("git config email");

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(dir.path())
        .output()
        .expect("git config name");
}

fn git_commit_all(dir: &TempDir, message: &str) {
    Command::new("git")
        .args(["add", "-A"])
        .current_dir(dir.path())
        .output()
        .expect("git add");

    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(dir.path())
        .output()
        .expect("git commit");
}

fn committed_project() -> TempDir {
    let dir = create_python_project();
    init_git_repo(&dir);
    git_commit_all(&dir, "Initial commit");
    dir
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn run_bump(root: &Path, mode: BumpMode) -> vbump_operations::Result<BumpOutput> {
    let operation = BumpOperation::new(
        FileSystemProjectProvider::new(),
        Git2Provider::new(),
        FileSystemVersionWriter::new(),
    );

    operation.execute(
        root,
        BumpInput {
            mode,
            overrides: ConfigOverrides::default(),
            timestamp: fixed_time(),
        },
    )
}

fn read(dir: &TempDir, relative: &str) -> String {
    fs::read_to_string(dir.path().join(relative)).expect("read project file")
}

#[test]
fn dev_bump_updates_both_files() {
    let dir = committed_project();

    let output = run_bump(dir.path(), BumpMode::Dev).expect("dev bump");

    assert_eq!(output.previous, SemanticVersion::new(0, 0, 1).with_dev(24));
    assert_eq!(output.next, "0.0.1-dev25");
    assert!(output.constant_replaced);
    assert_eq!(
        read(&dir, "src/asf/example/__init__.py"),
        INIT_PY.replace("0.0.1-dev24", "0.0.1-dev25")
    );
    assert_eq!(
        read(&dir, "pyproject.toml"),
        PYPROJECT
            .replace("0.0.1-dev24", "0.0.1-dev25")
            .replace("2024-01-01T00:00:00Z", "2025-06-01T12:30:00Z")
    );
}

#[test]
fn release_bump_drops_dev_marker() {
    let dir = committed_project();

    let output = run_bump(dir.path(), BumpMode::Release).expect("release bump");

    assert_eq!(output.next, "0.0.1");
    assert!(read(&dir, "pyproject.toml").contains("version = \"0.0.1\"\n"));
    assert!(
        read(&dir, "src/asf/example/__init__.py").contains("VERSION: Final[str] = \"0.0.1\"\n")
    );
}

#[test]
fn previous_version_comes_from_head_not_working_tree() {
    let dir = committed_project();

    run_bump(dir.path(), BumpMode::Dev).expect("first dev bump");
    let second = run_bump(dir.path(), BumpMode::Dev).expect("second dev bump");

    assert_eq!(second.previous, SemanticVersion::new(0, 0, 1).with_dev(24));
    assert_eq!(second.next, "0.0.1-dev25");
}

#[test]
fn committed_bump_is_picked_up_next_time() {
    let dir = committed_project();

    run_bump(dir.path(), BumpMode::Release).expect("release bump");
    git_commit_all(&dir, "Release 0.0.1");
    let output = run_bump(dir.path(), BumpMode::Dev).expect("dev bump");

    assert_eq!(output.previous, SemanticVersion::new(0, 0, 1));
    assert_eq!(output.next, "0.0.2-dev1");
}

#[test]
fn repository_without_commits_starts_from_zero() {
    let dir = create_python_project();
    init_git_repo(&dir);

    let output = run_bump(dir.path(), BumpMode::Dev).expect("dev bump");

    assert_eq!(output.previous, SemanticVersion::ZERO);
    assert_eq!(output.next, "0.0.1-dev1");
}

#[test]
fn specific_bump_skips_history() {
    let dir = create_python_project();
    init_git_repo(&dir);
    fs::write(dir.path().join("pyproject.toml"), "not committed, not parsed from HEAD")
        .expect("write pyproject.toml");
    git_commit_all(&dir, "Unparsable manifest");
    fs::write(dir.path().join("pyproject.toml"), PYPROJECT).expect("write pyproject.toml");

    let output =
        run_bump(dir.path(), BumpMode::Specific("1.0.0".to_string())).expect("specific bump");

    assert_eq!(output.previous, SemanticVersion::ZERO);
    assert_eq!(output.next, "1.0.0");
    assert!(read(&dir, "pyproject.toml").contains("version = \"1.0.0\"\n"));
}

#[test]
fn specific_bump_outside_a_repository_fails_without_writes() {
    let dir = create_python_project();

    let result = run_bump(dir.path(), BumpMode::Specific("1.0.0".to_string()));

    assert!(matches!(result, Err(OperationError::Git(_))));
    assert_eq!(read(&dir, "pyproject.toml"), PYPROJECT);
    assert_eq!(read(&dir, "src/asf/example/__init__.py"), INIT_PY);
}

#[test]
fn history_bump_outside_a_repository_fails_without_writes() {
    let dir = create_python_project();

    let result = run_bump(dir.path(), BumpMode::Release);

    assert!(matches!(result, Err(OperationError::Git(_))));
    assert_eq!(read(&dir, "pyproject.toml"), PYPROJECT);
    assert_eq!(read(&dir, "src/asf/example/__init__.py"), INIT_PY);
}

#[test]
fn project_in_repository_subdirectory() {
    let dir = TempDir::new().expect("create temp dir");
    let project = dir.path().join("python/asf-example");
    fs::create_dir_all(project.join("src/asf/example")).expect("create package dir");
    fs::write(project.join("pyproject.toml"), PYPROJECT).expect("write pyproject.toml");
    fs::write(project.join("src/asf/example/__init__.py"), INIT_PY).expect("write __init__.py");
    init_git_repo(&dir);
    git_commit_all(&dir, "Initial commit");

    let output = run_bump(&project, BumpMode::Release).expect("release bump");

    assert_eq!(output.previous, SemanticVersion::new(0, 0, 1).with_dev(24));
    assert_eq!(output.next, "0.0.1");
}

#[test]
fn structured_edit_failure_reports_inconsistent_state() {
    let dir = create_python_project();
    let manifest = PYPROJECT.replace(
        "project = \"asf-example\"\n",
        "project = \"asf-example\"\ntimestamp-key = \"project.name.released\"\n",
    );
    fs::write(dir.path().join("pyproject.toml"), &manifest).expect("write pyproject.toml");
    init_git_repo(&dir);
    git_commit_all(&dir, "Initial commit");

    let result = run_bump(dir.path(), BumpMode::Dev);

    let err = result.expect_err("manifest cannot be edited");
    assert!(matches!(err, OperationError::InconsistentVersionState { .. }));
    let message = err.to_string();
    assert!(message.contains("'project.name' exists but is not a table"));
    assert!(message.ends_with("project may be in an inconsistent version state"));
    assert_eq!(read(&dir, "pyproject.toml"), manifest);
    assert!(read(&dir, "src/asf/example/__init__.py").contains("\"0.0.1-dev25\""));
}

#[test]
fn missing_constant_file_fails_before_manifest_update() {
    let dir = committed_project();
    fs::remove_file(dir.path().join("src/asf/example/__init__.py")).expect("remove __init__.py");

    let result = run_bump(dir.path(), BumpMode::Dev);

    assert!(matches!(result, Err(OperationError::Manifest(_))));
    assert_eq!(read(&dir, "pyproject.toml"), PYPROJECT);
}
