mod bump;

use std::path::PathBuf;

use vbump_project::ConfigOverrides;
use vbump_version::BumpMode;

use crate::error::{CliError, Result};

/// The one thing a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    ShowVersion,
    Bump {
        /// Project root; `None` means the current directory.
        path: Option<PathBuf>,
        mode: BumpMode,
        overrides: ConfigOverrides,
    },
}

impl Action {
    pub(crate) fn execute(self) -> Result<()> {
        match self {
            Self::ShowVersion => {
                println!("{}", env!("VBUMP_VERSION"));
                Ok(())
            }
            Self::Bump {
                path,
                mode,
                overrides,
            } => {
                let project_root = resolve_project_root(path)?;
                bump::run(&project_root, mode, overrides)
            }
        }
    }
}

fn resolve_project_root(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}
