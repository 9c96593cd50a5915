use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use vbump_project::{ConfigOverrides, PythonProject};
use vbump_version::{BumpMode, SemanticVersion, compute_next};

use super::head_version::version_from_head_entry;
use crate::Result;
use crate::error::OperationError;
use crate::traits::{HistoryProvider, ProjectProvider, VersionFileWriter};

pub struct BumpInput {
    pub mode: BumpMode,
    pub overrides: ConfigOverrides,
    /// Recorded under the configured timestamp key of the manifest.
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutput {
    /// `0.0.0` for `Specific` bumps and for manifests never committed.
    pub previous: SemanticVersion,
    pub next: String,
    pub constant_path: PathBuf,
    pub manifest_path: PathBuf,
    pub constant_replaced: bool,
}

pub struct BumpOperation<P, H, W> {
    project_provider: P,
    history_provider: H,
    version_writer: W,
}

impl<P, H, W> BumpOperation<P, H, W>
where
    P: ProjectProvider,
    H: HistoryProvider,
    W: VersionFileWriter,
{
    pub fn new(project_provider: P, history_provider: H, version_writer: W) -> Self {
        Self {
            project_provider,
            history_provider,
            version_writer,
        }
    }

    /// Computes the next version and writes it to the constant file, then
    /// to the manifest.
    ///
    /// The constant file is written first. If the manifest update then fails
    /// after the constant was rewritten, the error is reported as
    /// [`OperationError::InconsistentVersionState`]; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be validated, is not inside a
    /// repository, the committed version cannot be determined, or either file
    /// cannot be updated. Only the last case can leave a file modified.
    pub fn execute(&self, project_root: &Path, input: BumpInput) -> Result<BumpOutput> {
        let project = self
            .project_provider
            .load_project(project_root, &input.overrides)?;
        debug!(project = project.name(), root = %project.root.display(), "loaded project");

        self.history_provider.ensure_repository(&project.root)?;

        let previous = if input.mode.needs_history() {
            self.read_previous_version(&project)?
        } else {
            SemanticVersion::ZERO
        };
        let next = compute_next(&input.mode, &previous);
        info!(%previous, %next, mode = ?input.mode, "computed next version");

        let config = &project.config;
        let constant_path = project.constant_path();
        let constant_replaced = self.version_writer.write_constant(
            &constant_path,
            config.constant_name(),
            config.constant_type(),
            &next,
        )?;

        if let Err(err) = self.version_writer.write_manifest_version(
            &project.manifest_path,
            &next,
            config.timestamp_key(),
            input.timestamp,
        ) {
            if !constant_replaced {
                return Err(err);
            }
            warn!(
                constant = %constant_path.display(),
                "manifest update failed after the version constant was rewritten"
            );
            return Err(OperationError::InconsistentVersionState {
                updated: constant_path,
                cause: Box::new(err),
            });
        }

        Ok(BumpOutput {
            previous,
            next,
            constant_path,
            manifest_path: project.manifest_path,
            constant_replaced,
        })
    }

    fn read_previous_version(&self, project: &PythonProject) -> Result<SemanticVersion> {
        let entry = self
            .history_provider
            .head_entry(&project.root, &project.manifest_path)?;
        version_from_head_entry(entry, &project.manifest_path)
    }
}
