//! User-facing diagnostics.
//!
//! Everything here writes to stderr: stdout is reserved for the bumped
//! version so the tool composes in shell pipelines.

use console::style;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").for_stderr().red().bold(), message)
}

/// Format a version change as `old -> new`.
pub fn format_change(previous: &str, next: &str) -> String {
    format!(
        "{} {} -> {}",
        style("✓").for_stderr().green(),
        style(previous).for_stderr().red(),
        style(next).for_stderr().green()
    )
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_change(previous: &str, next: &str, destination: &str) {
    eprintln!("{} ({})", format_change(previous, next), destination);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_keeps_message() {
        let msg = console::strip_ansi_codes(&format_error("bad input")).to_string();
        assert_eq!(msg, "ERROR: bad input");
    }

    #[test]
    fn test_format_change() {
        let msg = console::strip_ansi_codes(&format_change("v1.2.3", "v1.2.4")).to_string();
        assert_eq!(msg, "✓ v1.2.3 -> v1.2.4");
    }
}
