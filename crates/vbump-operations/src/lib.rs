mod error;
pub mod operations;
pub mod providers;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use error::{CorruptManifest, OperationError, Result, error_chain};
