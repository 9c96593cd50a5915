use std::path::{Path, PathBuf};

use crate::config::{BumpConfig, ConfigOverrides, resolve_config};
use crate::error::ProjectError;
use crate::manifest::read_manifest;

pub const MANIFEST_FILE: &str = "pyproject.toml";

/// A validated project root together with its resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonProject {
    pub root: PathBuf,
    pub manifest_path: PathBuf,
    pub config: BumpConfig,
}

impl PythonProject {
    #[must_use]
    pub fn name(&self) -> &str {
        self.config.project()
    }

    #[must_use]
    pub fn constant_path(&self) -> PathBuf {
        self.root.join(self.config.constant_file())
    }
}

/// Validates that `root` holds the manifest of the configured project.
///
/// Nothing is discovered upwards: `root` itself must contain `pyproject.toml`
/// and its `project.name` must equal the configured identifier.
///
/// # Errors
///
/// Returns `ProjectError` if the root or manifest is missing, the manifest
/// cannot be parsed, the configuration is invalid, or the names differ.
pub fn load_project(
    root: &Path,
    overrides: &ConfigOverrides,
) -> Result<PythonProject, ProjectError> {
    let root = root
        .canonicalize()
        .map_err(|source| ProjectError::RootNotFound {
            path: root.to_path_buf(),
            source,
        })?;

    let manifest_path = root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(ProjectError::ManifestNotFound {
            path: manifest_path,
        });
    }

    let manifest = read_manifest(&manifest_path)?;
    let config = resolve_config(manifest.vbump_metadata(), overrides)?;

    let found = manifest
        .project_name()
        .ok_or_else(|| ProjectError::MissingField {
            path: manifest_path.clone(),
            field: "project.name",
        })?;

    if found != config.project() {
        return Err(ProjectError::NameMismatch {
            expected: config.project().to_string(),
            found: found.to_string(),
        });
    }

    Ok(PythonProject {
        root,
        manifest_path,
        config,
    })
}
