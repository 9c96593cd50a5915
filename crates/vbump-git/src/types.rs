/// What the tree at `HEAD` holds for a given path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadEntry {
    /// No commit yet, or the path is not part of the committed tree.
    Missing,
    /// The path exists but is a directory, submodule or symlink.
    NotAFile,
    /// Raw content of the committed file.
    Blob(Vec<u8>),
}
