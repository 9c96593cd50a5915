mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::HeadEntry;

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// Opens the repository enclosing `start` and looks `path` up at `HEAD`.
///
/// # Errors
///
/// Returns an error if `start` is not inside a non-bare git repository or if
/// the lookup fails.
pub fn head_entry(start: &Path, path: &Path) -> Result<HeadEntry> {
    Repository::open(start)?.head_entry(path)
}
