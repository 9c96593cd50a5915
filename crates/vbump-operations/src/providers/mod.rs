mod git;
mod project;
mod version_files;

pub use git::Git2Provider;
pub use project::FileSystemProjectProvider;
pub use version_files::FileSystemVersionWriter;
