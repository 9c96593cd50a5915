use std::path::{Path, PathBuf};

use vbump_manifest::{DEFAULT_CONSTANT_NAME, DEFAULT_CONSTANT_TYPE, DEFAULT_TIMESTAMP_KEY};

use crate::error::ProjectError;
use crate::manifest::VbumpMetadata;

/// Values supplied on the command line; they win over `[tool.vbump]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub project: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    project: String,
    constant_file: PathBuf,
    constant_name: String,
    constant_type: String,
    timestamp_key: String,
}

impl BumpConfig {
    /// Configuration for `project` with every other setting at its default.
    #[must_use]
    pub fn new(project: impl Into<String>) -> Self {
        let project = project.into();
        Self {
            constant_file: default_constant_file(&project),
            project,
            constant_name: DEFAULT_CONSTANT_NAME.to_string(),
            constant_type: DEFAULT_CONSTANT_TYPE.to_string(),
            timestamp_key: DEFAULT_TIMESTAMP_KEY.to_string(),
        }
    }

    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Constant-source file, relative to the project root unless absolute.
    #[must_use]
    pub fn constant_file(&self) -> &Path {
        &self.constant_file
    }

    #[must_use]
    pub fn constant_name(&self) -> &str {
        &self.constant_name
    }

    #[must_use]
    pub fn constant_type(&self) -> &str {
        &self.constant_type
    }

    #[must_use]
    pub fn timestamp_key(&self) -> &str {
        &self.timestamp_key
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_constant_file(mut self, constant_file: impl Into<PathBuf>) -> Self {
        self.constant_file = constant_file.into();
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_timestamp_key(mut self, timestamp_key: impl Into<String>) -> Self {
        self.timestamp_key = timestamp_key.into();
        self
    }
}

/// `src/` followed by the project name with each `-` read as a package
/// separator, e.g. `asf-example` becomes `src/asf/example/__init__.py`.
#[must_use]
pub fn default_constant_file(project: &str) -> PathBuf {
    let mut path = PathBuf::from("src");
    path.extend(project.split('-'));
    path.push("__init__.py");
    path
}

pub(crate) fn resolve_config(
    metadata: Option<&VbumpMetadata>,
    overrides: &ConfigOverrides,
) -> Result<BumpConfig, ProjectError> {
    let metadata = metadata.cloned().unwrap_or_default();

    let project = overrides
        .project
        .clone()
        .or(metadata.project)
        .ok_or(ProjectError::MissingProjectName)?;
    if project.is_empty() {
        return Err(ProjectError::EmptySetting { key: "project" });
    }

    let constant_name = metadata
        .constant_name
        .unwrap_or_else(|| DEFAULT_CONSTANT_NAME.to_string());
    if constant_name.is_empty() {
        return Err(ProjectError::EmptySetting {
            key: "constant-name",
        });
    }

    let constant_type = metadata
        .constant_type
        .unwrap_or_else(|| DEFAULT_CONSTANT_TYPE.to_string());
    if constant_type.is_empty() {
        return Err(ProjectError::EmptySetting {
            key: "constant-type",
        });
    }

    let timestamp_key = metadata
        .timestamp_key
        .unwrap_or_else(|| DEFAULT_TIMESTAMP_KEY.to_string());
    if timestamp_key.split('.').any(str::is_empty) {
        return Err(ProjectError::InvalidTimestampKey { key: timestamp_key });
    }

    let constant_file = metadata
        .constant_file
        .unwrap_or_else(|| default_constant_file(&project));

    Ok(BumpConfig {
        project,
        constant_file,
        constant_name,
        constant_type,
        timestamp_key,
    })
}
