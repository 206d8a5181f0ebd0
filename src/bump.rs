use tracing::debug;

use crate::domain::{BumpDirective, BumpKind, Prerelease, SemanticVersion};
use crate::error::{BumpError, Result};

/// Bumps a version according to the directive.
///
/// Rules are applied in order, first match wins:
/// - **Finalize**: no `prerelease` requested but the version is a prerelease,
///   so the prerelease is dropped and major/minor/patch are kept
///   (`1.2.3-rc.2` -> `1.2.3`).
/// - **Prerelease increment**: `prerelease` requested and the version is a
///   prerelease, so its trailing counter is incremented
///   (`1.2.3-rc.1` -> `1.2.3-rc.2`, `0.1.0-5` -> `0.1.0-6`).
/// - **Kind bump**: otherwise the numeric component is bumped and lower
///   components reset. With `prerelease` a fresh `<tag>.1` train is opened
///   (`1.2.3` minor -> `1.3.0-rc.1`).
///
/// Build metadata is never touched.
///
/// # Example
/// ```ignore
/// let v = SemanticVersion::parse("1.2.3")?;
/// let next = bump(v, &BumpDirective::new(BumpKind::Minor, false))?;
/// assert_eq!(next.to_string(), "1.3.0");
/// ```
pub fn bump(mut version: SemanticVersion, directive: &BumpDirective) -> Result<SemanticVersion> {
    match (directive.prerelease, version.is_prerelease()) {
        (false, true) => {
            debug!(%version, "finalizing prerelease");
            version.prerelease = Prerelease::EMPTY;
        }
        (true, true) => {
            debug!(%version, "incrementing prerelease");
            version.prerelease = version.prerelease.incremented()?;
        }
        (_, false) => {
            debug!(%version, kind = %directive.kind, "bumping version");
            bump_kind(&mut version, directive.kind)?;
            if directive.prerelease {
                version.prerelease = Prerelease::train(directive.prerelease_tag.as_str());
            }
        }
    }
    Ok(version)
}

fn bump_kind(version: &mut SemanticVersion, kind: BumpKind) -> Result<()> {
    match kind {
        BumpKind::Major => {
            version.major = increment(version.major, "major")?;
            version.minor = 0;
            version.patch = 0;
        }
        BumpKind::Minor => {
            version.minor = increment(version.minor, "minor")?;
            version.patch = 0;
        }
        BumpKind::Patch => {
            version.patch = increment(version.patch, "patch")?;
        }
    }
    Ok(())
}

fn increment(value: u64, component: &str) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        BumpError::overflow(format!(
            "{} version {} cannot be incremented",
            component, value
        ))
    })
}
