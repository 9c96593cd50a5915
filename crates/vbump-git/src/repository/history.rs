use std::path::Path;

use git2::{ErrorCode, ObjectType};

use crate::{HeadEntry, Result};

use super::Repository;

const SYMLINK_FILE_MODE: i32 = 0o120_000;

impl Repository {
    /// Looks up `path` in the tree of the commit `HEAD` points to.
    ///
    /// The working tree and index are never consulted. An unborn `HEAD`
    /// counts as the path being absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GitError::PathOutsideRepository`] if an absolute path
    /// lies outside the work tree, or [`crate::GitError::Git`] if the object
    /// database cannot be read.
    pub fn head_entry(&self, path: &Path) -> Result<HeadEntry> {
        let relative = self.to_relative_path(path)?;

        let head = match self.inner.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(HeadEntry::Missing);
            }
            Err(e) => return Err(e.into()),
        };
        let tree = head.peel_to_tree()?;

        let entry = match tree.get_path(&relative) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(HeadEntry::Missing),
            Err(e) => return Err(e.into()),
        };

        if entry.kind() != Some(ObjectType::Blob) || entry.filemode() == SYMLINK_FILE_MODE {
            return Ok(HeadEntry::NotAFile);
        }

        let blob = self.inner.find_blob(entry.id())?;
        Ok(HeadEntry::Blob(blob.content().to_vec()))
    }
}
