use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML at '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("missing required field '{field}' in '{path}'")]
    MissingField { path: PathBuf, field: String },

    #[error("failed to update '{path}'")]
    UpdateFailed {
        path: PathBuf,
        #[source]
        source: UpdateError,
    },

    #[error("invalid version constant pattern")]
    InvalidConstantPattern(#[from] regex::Error),
}

/// Why an atomic rewrite of a single file was abandoned.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to parse document")]
    Parse(#[from] toml_edit::TomlError),

    #[error("cannot set '{key}': '{blocking}' exists but is not a table")]
    StructuredEdit { key: String, blocking: String },
}
