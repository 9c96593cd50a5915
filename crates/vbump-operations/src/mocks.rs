use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use vbump_git::{GitError, HeadEntry};
use vbump_manifest::{ManifestError, UpdateError};
use vbump_project::{BumpConfig, ConfigOverrides, MANIFEST_FILE, ProjectError, PythonProject};

use crate::Result;
use crate::traits::{HistoryProvider, ProjectProvider, VersionFileWriter};

pub struct MockProjectProvider {
    project: PythonProject,
    fail: bool,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new(project: PythonProject) -> Self {
        Self {
            project,
            fail: false,
        }
    }

    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::with_config(BumpConfig::new(name))
    }

    #[must_use]
    pub fn with_config(config: BumpConfig) -> Self {
        let root = PathBuf::from("/mock/project");
        Self::new(PythonProject {
            manifest_path: root.join(MANIFEST_FILE),
            root,
            config,
        })
    }

    #[must_use]
    pub fn failing() -> Self {
        let mut provider = Self::named("demo");
        provider.fail = true;
        provider
    }
}

impl ProjectProvider for MockProjectProvider {
    fn load_project(
        &self,
        _project_root: &Path,
        _overrides: &ConfigOverrides,
    ) -> Result<PythonProject> {
        if self.fail {
            return Err(ProjectError::MissingProjectName.into());
        }
        Ok(self.project.clone())
    }
}

pub struct MockHistoryProvider {
    entry: Option<HeadEntry>,
    lookups: Mutex<Vec<PathBuf>>,
}

impl MockHistoryProvider {
    fn with_entry(entry: Option<HeadEntry>) -> Self {
        Self {
            entry,
            lookups: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn missing() -> Self {
        Self::with_entry(Some(HeadEntry::Missing))
    }

    #[must_use]
    pub fn not_a_file() -> Self {
        Self::with_entry(Some(HeadEntry::NotAFile))
    }

    #[must_use]
    pub fn committed_version(version: &str) -> Self {
        Self::committed(&format!("[project]\nname = \"demo\"\nversion = \"{version}\"\n"))
    }

    #[must_use]
    pub fn committed(content: &str) -> Self {
        Self::with_entry(Some(HeadEntry::Blob(content.as_bytes().to_vec())))
    }

    /// Behaves as if the project were outside a repository.
    #[must_use]
    pub fn outside_repository() -> Self {
        Self::with_entry(None)
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn lookups(&self) -> Vec<PathBuf> {
        self.lookups.lock().expect("lock poisoned").clone()
    }
}

impl HistoryProvider for MockHistoryProvider {
    fn ensure_repository(&self, project_root: &Path) -> Result<()> {
        if self.entry.is_none() {
            return Err(GitError::NotARepository {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    fn head_entry(&self, project_root: &Path, path: &Path) -> Result<HeadEntry> {
        self.lookups
            .lock()
            .expect("lock poisoned")
            .push(path.to_path_buf());

        self.entry.clone().ok_or_else(|| {
            GitError::NotARepository {
                path: project_root.to_path_buf(),
            }
            .into()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteEvent {
    Constant {
        path: PathBuf,
        name: String,
        type_annotation: String,
        version: String,
    },
    Manifest {
        path: PathBuf,
        version: String,
        timestamp_key: String,
        timestamp: DateTime<Utc>,
    },
}

pub struct MockVersionWriter {
    events: Mutex<Vec<WriteEvent>>,
    constant_found: bool,
    fail_constant: bool,
    fail_manifest: bool,
}

impl MockVersionWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            constant_found: true,
            fail_constant: false,
            fail_manifest: false,
        }
    }

    #[must_use]
    pub fn without_constant(mut self) -> Self {
        self.constant_found = false;
        self
    }

    #[must_use]
    pub fn failing_constant(mut self) -> Self {
        self.fail_constant = true;
        self
    }

    #[must_use]
    pub fn failing_manifest(mut self) -> Self {
        self.fail_manifest = true;
        self
    }

    /// Writes in the order they were attempted; failed writes are included.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<WriteEvent> {
        self.events.lock().expect("lock poisoned").clone()
    }

    fn simulated_failure(path: &Path) -> ManifestError {
        ManifestError::UpdateFailed {
            path: path.to_path_buf(),
            source: UpdateError::Io(std::io::Error::other("simulated write failure")),
        }
    }
}

impl Default for MockVersionWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionFileWriter for MockVersionWriter {
    fn write_constant(
        &self,
        path: &Path,
        name: &str,
        type_annotation: &str,
        version: &str,
    ) -> Result<bool> {
        self.events
            .lock()
            .expect("lock poisoned")
            .push(WriteEvent::Constant {
                path: path.to_path_buf(),
                name: name.to_string(),
                type_annotation: type_annotation.to_string(),
                version: version.to_string(),
            });

        if self.fail_constant {
            return Err(Self::simulated_failure(path).into());
        }
        Ok(self.constant_found)
    }

    fn write_manifest_version(
        &self,
        manifest_path: &Path,
        version: &str,
        timestamp_key: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        self.events
            .lock()
            .expect("lock poisoned")
            .push(WriteEvent::Manifest {
                path: manifest_path.to_path_buf(),
                version: version.to_string(),
                timestamp_key: timestamp_key.to_string(),
                timestamp,
            });

        if self.fail_manifest {
            return Err(Self::simulated_failure(manifest_path).into());
        }
        Ok(())
    }
}
