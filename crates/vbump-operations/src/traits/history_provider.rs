use std::path::Path;

use vbump_git::HeadEntry;

use crate::Result;

/// Read-only access to what is committed at `HEAD`.
pub trait HistoryProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if `project_root` is not inside a non-bare repository.
    fn ensure_repository(&self, project_root: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if `project_root` is not inside a non-bare repository
    /// or the object database cannot be read.
    fn head_entry(&self, project_root: &Path, path: &Path) -> Result<HeadEntry>;
}
