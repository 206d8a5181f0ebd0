//! Domain logic - pure version rules independent of input and output

pub mod directive;
pub mod prerelease;
pub mod version;

pub use directive::{BumpDirective, BumpKind, DEFAULT_PRERELEASE_TAG};
pub use prerelease::{Prerelease, PrereleaseIdentifier};
pub use version::{PrefixedVersion, SemanticVersion};
