use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("unsupported version format: '{input}'")]
    Malformed { input: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;
