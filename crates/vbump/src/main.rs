mod commands;
mod error;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, ArgGroup, Parser};
use vbump_project::ConfigOverrides;
use vbump_version::BumpMode;

use crate::commands::Action;
use crate::error::{CliError, one_line};

/// Exit status for every runtime failure; clap uses the same for usage errors.
const FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "vbump")]
#[command(bin_name = "vbump")]
#[command(about = "Bump the version of a pyproject.toml project", long_about = None)]
#[command(disable_version_flag = true)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["bump_dev", "bump_release", "bump_specific", "version"])
))]
struct Cli {
    /// Next dev build: X.Y.Z-devN becomes X.Y.Z-dev(N+1), a release starts X.Y.(Z+1)-dev1
    #[arg(long)]
    bump_dev: bool,

    /// Release: X.Y.Z-devN becomes X.Y.Z, a release becomes X.Y.(Z+1)
    #[arg(long)]
    bump_release: bool,

    /// Write this exact version without reading the committed one
    #[arg(long, value_name = "VERSION")]
    bump_specific: Option<String>,

    /// Print the vbump version and exit
    #[arg(long)]
    version: bool,

    /// Project root containing pyproject.toml (default: current directory)
    #[arg(long = "path", short = 'C', value_name = "DIR")]
    path: Option<PathBuf>,

    /// Expected project name, overriding [tool.vbump] project
    #[arg(long, env = "VBUMP_PROJECT", value_name = "NAME")]
    project: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn action(self) -> Action {
        if self.version {
            return Action::ShowVersion;
        }

        let mode = match self.bump_specific {
            Some(version) => BumpMode::Specific(version),
            None if self.bump_release => BumpMode::Release,
            None => BumpMode::Dev,
        };

        Action::Bump {
            path: self.path,
            mode,
            overrides: ConfigOverrides {
                project: self.project,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", one_line(&e));
            ExitCode::from(FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if !cli.version {
        logging::init(cli.verbose)?;
    }
    cli.action().execute()
}
