use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ProjectError;

#[derive(Debug, Deserialize)]
pub(crate) struct PyProjectManifest {
    pub(crate) project: Option<ProjectSection>,
    pub(crate) tool: Option<ToolSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectSection {
    pub(crate) name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToolSection {
    pub(crate) vbump: Option<VbumpMetadata>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct VbumpMetadata {
    pub(crate) project: Option<String>,
    pub(crate) constant_file: Option<PathBuf>,
    pub(crate) constant_name: Option<String>,
    pub(crate) constant_type: Option<String>,
    pub(crate) timestamp_key: Option<String>,
}

impl PyProjectManifest {
    pub(crate) fn project_name(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.name.as_deref())
    }

    pub(crate) fn vbump_metadata(&self) -> Option<&VbumpMetadata> {
        self.tool.as_ref().and_then(|t| t.vbump.as_ref())
    }
}

pub(crate) fn read_manifest(path: &Path) -> Result<PyProjectManifest, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ProjectError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
