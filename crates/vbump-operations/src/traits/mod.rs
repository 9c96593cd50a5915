mod history_provider;
mod project_provider;
mod version_writer;

pub use history_provider::HistoryProvider;
pub use project_provider::ProjectProvider;
pub use version_writer::VersionFileWriter;
