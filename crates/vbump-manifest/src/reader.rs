use std::path::Path;

use toml_edit::DocumentMut;

use crate::error::ManifestError;

/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read, or
/// `ManifestError::Parse` if the TOML is malformed.
pub fn read_document(path: &Path) -> Result<DocumentMut, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content, path)
}

/// Parses manifest text that did not necessarily come from disk; `path` is
/// only used for error reporting.
///
/// # Errors
///
/// Returns `ManifestError::Parse` if the TOML is malformed.
pub fn parse_document(content: &str, path: &Path) -> Result<DocumentMut, ManifestError> {
    content
        .parse::<DocumentMut>()
        .map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Extracts `project.version` as text.
///
/// # Errors
///
/// Returns `ManifestError::MissingField` if the `project` table or its
/// `version` string is absent.
pub fn project_version(doc: &DocumentMut, path: &Path) -> Result<String, ManifestError> {
    let project = doc
        .get("project")
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "project".to_string(),
        })?;

    let version_item = project
        .get("version")
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "project.version".to_string(),
        })?;

    version_item
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "project.version (as string)".to_string(),
        })
}

#[cfg(test)]
pub(crate) fn read_version(path: &Path) -> Result<String, ManifestError> {
    let doc = read_document(path)?;
    project_version(&doc, path)
}
