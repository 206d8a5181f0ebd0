//! Main workflow orchestration logic
//!
//! Keeps the read -> parse -> bump -> write pipeline apart from clap so it
//! can be driven programmatically and tested without spawning the binary.

use tracing::info;

use crate::bump::bump;
use crate::config::Config;
use crate::domain::{BumpDirective, PrefixedVersion};
use crate::error::Result;
use crate::io::{self, InputSource, OutputTarget};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args without depending on clap. `None` fields fall back
/// to the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Where to read the current version from
    pub input: InputSource,

    /// Where to write the bumped version
    pub output: OutputTarget,

    /// Bump kind as typed by the user, e.g. `"minor"`
    pub kind: Option<String>,

    /// Bump as prerelease version
    pub pre: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version as it was read
    pub previous: PrefixedVersion,

    /// The version that was written
    pub next: PrefixedVersion,
}

/// Build the directive from CLI arguments layered over configuration
pub fn resolve_directive(args: &BumpWorkflowArgs, config: &Config) -> Result<BumpDirective> {
    let kind = args.kind.as_deref().unwrap_or(&config.bump.kind);
    BumpDirective::parse(kind, args.pre)?.with_prerelease_tag(&config.bump.prerelease_tag)
}

/// Compute the next version without writing it anywhere
pub fn next_version(raw: &str, directive: &BumpDirective) -> Result<WorkflowResult> {
    let previous = PrefixedVersion::parse(raw)?;
    let next = previous.with_version(bump(previous.version.clone(), directive)?);
    Ok(WorkflowResult { previous, next })
}

/// Main bump workflow
///
/// 1. Validate the bump kind (before any input is read)
/// 2. Read the current version
/// 3. Bump it
/// 4. Write the new version to the output target
pub fn run_bump_workflow(args: &BumpWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let directive = resolve_directive(args, config)?;
    let raw = io::read_version(&args.input)?;
    let result = next_version(&raw, &directive)?;

    io::emit_version(&args.output, &result.next.to_string())?;
    info!(previous = %result.previous, next = %result.next, "version bumped");

    Ok(result)
}
