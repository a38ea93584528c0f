use regex::Regex;
use std::sync::LazyLock;

/// Marker that npm prints on stderr (with `--loglevel=info`) when a package's
/// postinstall step runs.
pub const POSTINSTALL_MARKER: &str = "npm info postinstall";

/// `npm info postinstall <name>@<version>`; the first group is the name.
static POSTINSTALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{} ([^\r@]+)@.+$", regex::escape(POSTINSTALL_MARKER)))
        .expect("postinstall pattern is a valid regex")
});

/// Returns the package name from a single postinstall log line.
pub fn extract_dependency(line: &str) -> Option<&str> {
    POSTINSTALL_PATTERN
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

/// Scans log lines for postinstall events and returns the package names in
/// the order they appeared. Lines that do not match are skipped.
pub fn extract_dependencies<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| extract_dependency(line.as_ref()))
        .map(str::to_string)
        .collect()
}
