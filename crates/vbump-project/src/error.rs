use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to resolve project root '{path}'")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("must run from project root with pyproject.toml: '{path}' not found")]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read manifest at '{path}'")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest at '{path}'")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest at '{path}' missing required field '{field}'")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("pyproject.toml does not belong to '{expected}' (project.name is '{found}')")]
    NameMismatch { expected: String, found: String },

    #[error("no project identifier configured: set [tool.vbump] project or pass --project")]
    MissingProjectName,

    #[error("setting '{key}' must not be empty")]
    EmptySetting { key: &'static str },

    #[error("invalid timestamp key '{key}': expected a dotted path of non-empty keys")]
    InvalidTimestampKey { key: String },
}
