use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot determine the current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("invalid log filter '{directives}'")]
    LogFilter {
        directives: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("cannot install the log subscriber")]
    LogInit(#[source] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Operation(#[from] vbump_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Renders `error` with its causes as a single line.
///
/// Multi-line messages, such as TOML parse diagnostics, are folded onto one
/// line.
pub(crate) fn one_line(error: &CliError) -> String {
    vbump_operations::error_chain(error)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
