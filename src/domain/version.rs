use crate::domain::prerelease::Prerelease;
use crate::error::{BumpError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// `build` metadata is carried through untouched and ignored for precedence
/// except as a final tie-breaker, matching the `semver` crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Prerelease,
    pub build: String,
}

impl SemanticVersion {
    /// Create a release version with no prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: Prerelease::EMPTY,
            build: String::new(),
        }
    }

    pub fn with_prerelease(mut self, prerelease: impl Into<Prerelease>) -> Self {
        self.prerelease = prerelease.into();
        self
    }

    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    /// Parse a strict semantic version such as `1.2.3-rc.1+build.5`
    ///
    /// No `v` prefix is accepted here; see [`PrefixedVersion`].
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl FromStr for SemanticVersion {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = semver::Version::parse(s)
            .map_err(|e| BumpError::invalid_input(format!("'{}' - {}", s, e)))?;

        Ok(SemanticVersion {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease: Prerelease::parse(parsed.pre.as_str())?,
            build: parsed.build.as_str().to_string(),
        })
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => self.prerelease.cmp(&other.prerelease),
            })
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_prerelease() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

/// A version as written by the user, remembering a leading `v`
///
/// `v1.2.3` and `1.2.3` parse to the same [`SemanticVersion`]; the prefix is
/// restored when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedVersion {
    pub prefixed: bool,
    pub version: SemanticVersion,
}

impl PrefixedVersion {
    const PREFIX: char = 'v';

    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Same prefix, different version
    pub fn with_version(&self, version: SemanticVersion) -> Self {
        PrefixedVersion {
            prefixed: self.prefixed,
            version,
        }
    }
}

impl FromStr for PrefixedVersion {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        let (prefixed, rest) = match s.strip_prefix(Self::PREFIX) {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        Ok(PrefixedVersion {
            prefixed,
            version: rest.parse()?,
        })
    }
}

impl fmt::Display for PrefixedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefixed {
            write!(f, "{}", Self::PREFIX)?;
        }
        write!(f, "{}", self.version)
    }
}
