//! Reading the version to bump and writing the result.
//!
//! Both ends are generic over `Read`/`Write` so the workflow never touches a
//! global writer; the binary decides which concrete stream to hand in.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Path argument meaning "use the standard stream instead of a file"
pub const STDIO_PATH: &str = "-";

/// Where the version string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Passed directly on the command line
    Argument(String),
    /// Read from standard input
    Stdin,
    /// Read from a file
    File(PathBuf),
}

impl InputSource {
    /// Map an `--input` path, treating `-` as standard input
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path == Path::new(STDIO_PATH) {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }
}

/// Where the bumped version goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Map an `--output` path, treating `-` as standard output
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path == Path::new(STDIO_PATH) {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }
}

/// Read the raw version string from its source
///
/// File and stdin content is stripped of trailing line terminators.
pub fn read_version(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Argument(version) => Ok(version.clone()),
        InputSource::Stdin => {
            debug!("reading version from stdin");
            read_version_from(io::stdin().lock())
        }
        InputSource::File(path) => {
            debug!(path = %path.display(), "reading version from file");
            let content = fs::read_to_string(path)?;
            Ok(trim_line_terminators(&content).to_string())
        }
    }
}

/// Read the raw version string from any reader
pub fn read_version_from<R: Read>(mut reader: R) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(trim_line_terminators(&content).to_string())
}

fn trim_line_terminators(content: &str) -> &str {
    content.trim_end_matches(&['\r', '\n'][..])
}

/// Write the version followed by a newline
pub fn write_version<W: Write>(writer: &mut W, version: &str) -> Result<()> {
    writeln!(writer, "{}", version)?;
    writer.flush()?;
    Ok(())
}

/// Write the version to its target, creating or truncating files
pub fn emit_version(target: &OutputTarget, version: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => write_version(&mut io::stdout().lock(), version),
        OutputTarget::File(path) => {
            debug!(path = %path.display(), "writing version to file");
            let mut writer = BufWriter::new(File::create(path)?);
            write_version(&mut writer, version)
        }
    }
}
