use crate::domain::prerelease::PrereleaseIdentifier;
use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Tag used to open a fresh prerelease train when none is configured
pub const DEFAULT_PRERELEASE_TAG: &str = "rc";

/// Which numeric component a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    pub const ALL: [BumpKind; 3] = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    /// Case-insensitive; anything outside major/minor/patch is `InvalidBumpKind`
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        BumpKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| BumpError::invalid_kind(s))
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one invocation asks the bumper to do
///
/// Built once from user input and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpDirective {
    pub kind: BumpKind,
    pub prerelease: bool,
    pub prerelease_tag: String,
}

impl BumpDirective {
    pub fn new(kind: BumpKind, prerelease: bool) -> Self {
        BumpDirective {
            kind,
            prerelease,
            prerelease_tag: DEFAULT_PRERELEASE_TAG.to_string(),
        }
    }

    /// Build a directive from a textual kind such as `"minor"`
    pub fn parse(kind: &str, prerelease: bool) -> Result<Self> {
        Ok(BumpDirective::new(kind.parse()?, prerelease))
    }

    /// Replace the tag used for fresh prerelease trains
    ///
    /// The tag must be a single alphanumeric identifier; a numeric tag would
    /// change the shape of the train it opens.
    pub fn with_prerelease_tag(mut self, tag: &str) -> Result<Self> {
        match PrereleaseIdentifier::parse(tag) {
            Ok(PrereleaseIdentifier::Alphanumeric(tag)) => {
                self.prerelease_tag = tag;
                Ok(self)
            }
            _ => Err(BumpError::config(format!(
                "prerelease tag '{}' must be a single non-numeric identifier of [0-9A-Za-z-]",
                tag
            ))),
        }
    }
}

impl Default for BumpDirective {
    fn default() -> Self {
        BumpDirective::new(BumpKind::default(), false)
    }
}
