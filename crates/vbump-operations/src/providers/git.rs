use std::path::Path;

use vbump_git::{HeadEntry, Repository};

use crate::Result;
use crate::traits::HistoryProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryProvider for Git2Provider {
    fn ensure_repository(&self, project_root: &Path) -> Result<()> {
        Repository::open(project_root)?;
        Ok(())
    }

    fn head_entry(&self, project_root: &Path, path: &Path) -> Result<HeadEntry> {
        Ok(vbump_git::head_entry(project_root, path)?)
    }
}
