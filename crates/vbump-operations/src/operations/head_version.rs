use std::path::Path;

use tracing::debug;
use vbump_git::HeadEntry;
use vbump_manifest::{parse_document, project_version};
use vbump_version::SemanticVersion;

use crate::Result;
use crate::error::{CorruptManifest, OperationError};

/// Derives the previously committed version from the manifest entry at `HEAD`.
///
/// A manifest that was never committed counts as version `0.0.0`.
///
/// # Errors
///
/// Returns [`OperationError::CorruptHistoricalManifest`] if the entry is not a
/// regular file, is not UTF-8, does not parse, or lacks a string
/// `project.version`, and [`OperationError::HeadVersion`] if that version is
/// malformed.
pub fn version_from_head_entry(
    entry: HeadEntry,
    manifest_path: &Path,
) -> Result<SemanticVersion> {
    let corrupt = |reason| OperationError::CorruptHistoricalManifest {
        path: manifest_path.to_path_buf(),
        reason,
    };

    let bytes = match entry {
        HeadEntry::Missing => {
            debug!(manifest = %manifest_path.display(), "manifest not committed yet");
            return Ok(SemanticVersion::ZERO);
        }
        HeadEntry::NotAFile => return Err(corrupt(CorruptManifest::NotAFile)),
        HeadEntry::Blob(bytes) => bytes,
    };

    let content = std::str::from_utf8(&bytes).map_err(|e| corrupt(CorruptManifest::NotUtf8(e)))?;
    let text = parse_document(content, manifest_path)
        .and_then(|doc| project_version(&doc, manifest_path))
        .map_err(|e| corrupt(CorruptManifest::Document(e)))?;

    debug!(version = %text, "read committed version");
    SemanticVersion::parse(&text).map_err(OperationError::HeadVersion)
}
