use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not inside a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("a working tree, not a bare git repository, is required: '{path}'")]
    BareRepository { path: PathBuf },

    #[error("'{path}' is outside the repository work tree '{root}'")]
    PathOutsideRepository { path: PathBuf, root: PathBuf },
}
