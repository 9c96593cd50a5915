mod error;
mod version;

pub use error::{Result, VersionError};
pub use version::SemanticVersion;

/// How the next version is derived from the previously committed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpMode {
    Release,
    Dev,
    /// Caller-supplied version text, written verbatim.
    Specific(String),
}

impl BumpMode {
    /// `Specific` ignores the previous version, so the history lookup can be skipped.
    #[must_use]
    pub fn needs_history(&self) -> bool {
        !matches!(self, Self::Specific(_))
    }
}

/// Computes the next version text.
///
/// Incremented components are widened before adding one, so the result is
/// correct even when `previous` already holds `u64::MAX` in that position.
#[must_use]
pub fn compute_next(mode: &BumpMode, previous: &SemanticVersion) -> String {
    let SemanticVersion {
        major,
        minor,
        patch,
        dev,
    } = *previous;

    match (mode, dev) {
        (BumpMode::Specific(version), _) => version.clone(),
        (BumpMode::Release, Some(_)) => SemanticVersion::new(major, minor, patch).to_string(),
        (BumpMode::Release, None) => format!("{major}.{minor}.{}", u128::from(patch) + 1),
        (BumpMode::Dev, None) => format!("{major}.{minor}.{}-dev1", u128::from(patch) + 1),
        (BumpMode::Dev, Some(dev)) => format!("{major}.{minor}.{patch}-dev{}", u128::from(dev) + 1),
    }
}
