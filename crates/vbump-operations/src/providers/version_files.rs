use std::path::Path;

use chrono::{DateTime, Utc};
use vbump_manifest::ConstantPattern;

use crate::Result;
use crate::traits::VersionFileWriter;

pub struct FileSystemVersionWriter;

impl FileSystemVersionWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemVersionWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionFileWriter for FileSystemVersionWriter {
    fn write_constant(
        &self,
        path: &Path,
        name: &str,
        type_annotation: &str,
        version: &str,
    ) -> Result<bool> {
        let pattern = ConstantPattern::new(name, type_annotation)?;
        Ok(vbump_manifest::write_constant(path, &pattern, version)?)
    }

    fn write_manifest_version(
        &self,
        manifest_path: &Path,
        version: &str,
        timestamp_key: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        Ok(vbump_manifest::write_version(
            manifest_path,
            version,
            timestamp_key,
            timestamp,
        )?)
    }
}
