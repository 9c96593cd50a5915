mod config;
mod error;
mod manifest;
mod project;

pub use config::{BumpConfig, ConfigOverrides, default_constant_file};
pub use error::ProjectError;
pub use project::{MANIFEST_FILE, PythonProject, load_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
