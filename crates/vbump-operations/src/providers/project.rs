use std::path::Path;

use vbump_project::{ConfigOverrides, PythonProject, load_project};

use crate::Result;
use crate::traits::ProjectProvider;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn load_project(
        &self,
        project_root: &Path,
        overrides: &ConfigOverrides,
    ) -> Result<PythonProject> {
        Ok(load_project(project_root, overrides)?)
    }
}
