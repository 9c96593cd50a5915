mod history;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// Discovers the repository enclosing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository,
    /// [`GitError::BareRepository`] if the repository has no work tree, or
    /// [`GitError::Git`] if a repository was found but cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => GitError::NotARepository {
                path: path.to_path_buf(),
            },
            _ => GitError::Git(e),
        })?;

        if inner.is_bare() {
            return Err(GitError::BareRepository {
                path: inner.path().to_path_buf(),
            });
        }

        let root = inner.workdir().ok_or_else(|| GitError::BareRepository {
            path: inner.path().to_path_buf(),
        })?;

        // Use dunce to get a path without the \\?\ prefix on Windows
        let root =
            dunce::canonicalize(root).unwrap_or_else(|_| dunce::simplified(root).to_path_buf());

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn to_relative_path(&self, path: &Path) -> Result<PathBuf> {
        if !path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let normalized =
            dunce::canonicalize(path).unwrap_or_else(|_| dunce::simplified(path).to_path_buf());
        normalized
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .map_err(|_| GitError::PathOutsideRepository {
                path: path.to_path_buf(),
                root: self.root.clone(),
            })
    }
}
