mod atomic;
mod constant;
mod error;
mod reader;
mod writer;

pub use atomic::replace_atomically;
pub use constant::{
    ConstantPattern, DEFAULT_CONSTANT_NAME, DEFAULT_CONSTANT_TYPE, rewrite_constant,
    write_constant,
};
pub use error::{ManifestError, UpdateError};
pub use reader::{parse_document, project_version, read_document};
pub use writer::{
    DEFAULT_TIMESTAMP_KEY, PROJECT_VERSION_KEY, format_timestamp, set_dotted_key, write_version,
};
