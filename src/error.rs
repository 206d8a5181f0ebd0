use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid version input: {0}")]
    InvalidInput(String),

    #[error("Invalid bump kind: '{0}' - please use one of [major | minor | patch]")]
    InvalidBumpKind(String),

    #[error(
        "Unsupported prerelease '{0}': can't handle prerelease tags not of the form \"-tag.number\" or \"-number\""
    )]
    UnsupportedPrereleaseFormat(String),

    #[error("Version component overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an invalid input error with context
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        BumpError::InvalidInput(msg.into())
    }

    /// Create an invalid bump kind error for the rejected kind
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        BumpError::InvalidBumpKind(kind.into())
    }

    /// Create an unsupported prerelease error for the rejected prerelease
    pub fn unsupported_prerelease(prerelease: impl Into<String>) -> Self {
        BumpError::UnsupportedPrereleaseFormat(prerelease.into())
    }

    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        BumpError::Overflow(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }
}

impl From<toml::de::Error> for BumpError {
    fn from(err: toml::de::Error) -> Self {
        BumpError::Config(err.to_string())
    }
}
