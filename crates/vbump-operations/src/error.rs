use std::path::PathBuf;

use thiserror::Error;

/// Why the manifest committed at `HEAD` cannot yield a version.
#[derive(Debug, Error)]
pub enum CorruptManifest {
    #[error("it is in HEAD, but not a regular file")]
    NotAFile,

    #[error("it is not valid UTF-8")]
    NotUtf8(#[source] std::str::Utf8Error),

    #[error("its content is not usable")]
    Document(#[source] vbump_manifest::ManifestError),
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] vbump_git::GitError),

    #[error(transparent)]
    Project(#[from] vbump_project::ProjectError),

    #[error(transparent)]
    Manifest(#[from] vbump_manifest::ManifestError),

    #[error("committed project.version is not a supported version")]
    HeadVersion(#[source] vbump_version::VersionError),

    #[error("cannot read the committed version from '{path}'")]
    CorruptHistoricalManifest {
        path: PathBuf,
        #[source]
        reason: CorruptManifest,
    },

    #[error(
        "updated '{updated}' but not the manifest: {}; project may be in an inconsistent version state",
        error_chain(.cause)
    )]
    InconsistentVersionState {
        updated: PathBuf,
        cause: Box<OperationError>,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;

/// Renders `err` followed by each of its sources, separated by `": "`.
#[must_use]
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
