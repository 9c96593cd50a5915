use std::path::Path;

use vbump_project::{ConfigOverrides, PythonProject};

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if `project_root` does not hold the configured
    /// project's manifest or the configuration is invalid.
    fn load_project(
        &self,
        project_root: &Path,
        overrides: &ConfigOverrides,
    ) -> Result<PythonProject>;
}
