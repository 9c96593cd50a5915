use std::path::Path;

use chrono::{DateTime, Utc};

use crate::Result;

pub trait VersionFileWriter: Send + Sync {
    /// Rewrites the `name: type_annotation = "..."` line in `path`.
    ///
    /// Returns whether a matching line was found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be replaced atomically.
    fn write_constant(
        &self,
        path: &Path,
        name: &str,
        type_annotation: &str,
        version: &str,
    ) -> Result<bool>;

    /// Sets `project.version` and stamps `timestamp_key` with `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be parsed, edited, or replaced
    /// atomically.
    fn write_manifest_version(
        &self,
        manifest_path: &Path,
        version: &str,
        timestamp_key: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<()>;
}
