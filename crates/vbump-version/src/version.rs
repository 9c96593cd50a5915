use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, VersionError};

const DEV_PREFIX: &str = "dev";

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A([0-9]+)\.([0-9]+)\.([0-9]+)(?:-dev([0-9]+))?\z")
        .unwrap_or_else(|e| unreachable!("version pattern is a literal: {e}"))
});

/// A `MAJOR.MINOR.PATCH` version with an optional `-devN` counter.
///
/// `dev == None` is a release. `dev == Some(n)` is development build `n` of
/// the patch release it precedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub dev: Option<u64>,
}

impl SemanticVersion {
    /// Stands in for the previous version when none has ever been committed.
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            dev: None,
        }
    }

    #[must_use]
    pub const fn with_dev(mut self, dev: u64) -> Self {
        self.dev = Some(dev);
        self
    }

    /// Parses `MAJOR.MINOR.PATCH` or `MAJOR.MINOR.PATCH-devN`.
    ///
    /// Leading zeros are accepted and dropped, so `1.0.0-dev05` reads as dev
    /// build 5 and renders back as `1.0.0-dev5`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Malformed`] for any other input, including
    /// components that do not fit in a `u64`.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || VersionError::Malformed {
            input: input.to_string(),
        };

        let captures = VERSION_PATTERN.captures(input).ok_or_else(malformed)?;
        let number = |index: usize| -> Result<Option<u64>> {
            captures
                .get(index)
                .map(|digits| digits.as_str().parse::<u64>().map_err(|_| malformed()))
                .transpose()
        };

        let component = |index: usize| number(index)?.ok_or_else(malformed);

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            dev: number(4)?,
        })
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(dev) = self.dev {
            write!(f, "-{DEV_PREFIX}{dev}")?;
        }
        Ok(())
    }
}
