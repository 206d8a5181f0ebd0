//! Prerelease identifiers for semantic versions
//!
//! A prerelease is the dot-separated suffix after `-` in a version such as
//! `1.2.3-rc.1`. Each identifier is either numeric or alphanumeric, and the
//! two kinds order differently. See https://semver.org/#spec-item-9

use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// One dot-separated component of a prerelease suffix.
///
/// Variant order matters for the derived `Ord`: numeric identifiers always
/// have lower precedence than alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrereleaseIdentifier {
    /// Identifier made only of digits, e.g. the `1` in `rc.1`
    Numeric(u64),
    /// Identifier containing at least one non-digit, e.g. the `rc` in `rc.1`
    Alphanumeric(String),
}

impl PrereleaseIdentifier {
    /// Create a numeric identifier
    pub fn numeric(value: u64) -> Self {
        PrereleaseIdentifier::Numeric(value)
    }

    /// Create an alphanumeric identifier
    pub fn alphanumeric(tag: impl Into<String>) -> Self {
        PrereleaseIdentifier::Alphanumeric(tag.into())
    }

    /// Parse a single identifier
    ///
    /// Accepts ASCII alphanumerics and hyphens. All-digit input becomes
    /// `Numeric`, anything else `Alphanumeric`.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for PrereleaseIdentifier {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(BumpError::invalid_input("Empty prerelease identifier"));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(BumpError::invalid_input(format!(
                "Invalid prerelease identifier: '{}'",
                s
            )));
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            let value = s.parse::<u64>().map_err(|_| {
                BumpError::overflow(format!("prerelease identifier '{}' is too large", s))
            })?;
            Ok(PrereleaseIdentifier::Numeric(value))
        } else {
            Ok(PrereleaseIdentifier::Alphanumeric(s.to_string()))
        }
    }
}

impl fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrereleaseIdentifier::Numeric(n) => write!(f, "{}", n),
            PrereleaseIdentifier::Alphanumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Ordered sequence of prerelease identifiers
///
/// An empty sequence means the version is not a prerelease.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prerelease(Vec<PrereleaseIdentifier>);

impl Prerelease {
    /// The empty prerelease
    pub const EMPTY: Prerelease = Prerelease(Vec::new());

    pub fn new(identifiers: Vec<PrereleaseIdentifier>) -> Self {
        Prerelease(identifiers)
    }

    /// A fresh prerelease train: `<tag>.1`
    pub fn train(tag: impl Into<String>) -> Self {
        Prerelease(vec![
            PrereleaseIdentifier::alphanumeric(tag),
            PrereleaseIdentifier::numeric(1),
        ])
    }

    /// Parse a dot-separated prerelease suffix (without the leading `-`)
    ///
    /// The empty string parses to the empty prerelease.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Prerelease::EMPTY);
        }
        s.split('.')
            .map(PrereleaseIdentifier::parse)
            .collect::<Result<Vec<_>>>()
            .map(Prerelease)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn identifiers(&self) -> &[PrereleaseIdentifier] {
        &self.0
    }

    /// Increment the trailing counter of a `-number` or `-tag.number` prerelease
    ///
    /// Any other shape is ambiguous and fails with `UnsupportedPrereleaseFormat`.
    pub fn incremented(&self) -> Result<Self> {
        let mut identifiers = self.0.clone();
        match identifiers.as_mut_slice() {
            [PrereleaseIdentifier::Numeric(n)] | [_, PrereleaseIdentifier::Numeric(n)] => {
                *n = n.checked_add(1).ok_or_else(|| {
                    BumpError::overflow(format!("cannot increment prerelease '{}'", self))
                })?;
            }
            _ => return Err(BumpError::unsupported_prerelease(self.to_string())),
        }
        Ok(Prerelease(identifiers))
    }
}

impl From<Vec<PrereleaseIdentifier>> for Prerelease {
    fn from(identifiers: Vec<PrereleaseIdentifier>) -> Self {
        Prerelease(identifiers)
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", identifier)?;
        }
        Ok(())
    }
}
