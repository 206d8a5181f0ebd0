use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use semver_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use semver_bump::config;
use semver_bump::io::{InputSource, OutputTarget};
use semver_bump::{observability, ui, BumpError};

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    version,
    about = "Bump a semantic version string by major, minor, patch or prerelease"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version to bump, e.g. v0.1.0 (read from --input or stdin when omitted)",
        conflicts_with = "input"
    )]
    current: Option<String>,

    #[arg(short, long, help = "Kind of version bump [major | minor | patch]")]
    kind: Option<String>,

    #[arg(long, help = "Bump as prerelease version")]
    pre: bool,

    #[arg(short, long, help = "Read version from file ('-' for stdin)")]
    input: Option<PathBuf>,

    #[arg(short, long, help = "Write new version to file ('-' for stdout)")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,

    #[arg(short, long, help = "Only log errors", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "bump failed");
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())
        .context("failed to load configuration")?;

    observability::init_logging(observability::env_filter(
        args.quiet,
        args.verbose,
        &config.logging.level,
    ))?;

    let input = match (args.current, args.input) {
        (Some(version), _) => InputSource::Argument(version),
        (None, Some(path)) => InputSource::from_path(path),
        (None, None) if std::io::stdin().is_terminal() => {
            return Err(BumpError::invalid_input(
                "must pass a version string\nex. semver-bump v0.1.0",
            )
            .into());
        }
        (None, None) => InputSource::Stdin,
    };
    let output = args
        .output
        .map(OutputTarget::from_path)
        .unwrap_or_default();

    let workflow_args = BumpWorkflowArgs {
        input,
        output,
        kind: args.kind,
        pre: args.pre,
    };
    let result = run_bump_workflow(&workflow_args, &config)?;

    if let OutputTarget::File(path) = &workflow_args.output {
        if !args.quiet {
            ui::display_change(
                &result.previous.to_string(),
                &result.next.to_string(),
                &path.display().to_string(),
            );
        }
    }

    Ok(())
}
