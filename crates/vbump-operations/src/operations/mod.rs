mod bump;
mod head_version;

pub use bump::{BumpInput, BumpOperation, BumpOutput};
pub use head_version::version_from_head_entry;
