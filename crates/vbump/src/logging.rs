use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{CliError, Result};

/// Environment variable holding an `EnvFilter` directive; wins over `-v`.
pub(crate) const LOG_ENV: &str = "VBUMP_LOG";

/// Installs a stderr subscriber so stdout only carries the bump result.
pub(crate) fn init(verbosity: u8) -> Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => {
            EnvFilter::try_new(&directives).map_err(|source| CliError::LogFilter {
                directives,
                source,
            })?
        }
        Err(_) => EnvFilter::new(default_level(verbosity)),
    };

    let layer = fmt::layer()
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(CliError::LogInit)
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
