use indexmap::IndexSet;

/// Dependencies expected to report a postinstall step, in listing order.
pub type Dependencies = IndexSet<String>;

/// Parses `npm ls --depth=0 --parseable` output into dependency names.
///
/// The first line is the project root and is discarded. Every other line is
/// the path of a top-level package directory whose last segment (split on
/// either path separator) is the package name.
pub fn parse_dependency_listing(listing: &str) -> Dependencies {
    listing
        .trim()
        .lines()
        .skip(1)
        .filter_map(|line| {
            let name = line.trim_end_matches('\r').rsplit(|c: char| c == '/' || c == '\\').next()?;
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_project_root_and_keeps_last_segment() {
        let listing = "/home/dev/app\n/home/dev/app/node_modules/react\n/home/dev/app/node_modules/babel-core\n";
        let deps = parse_dependency_listing(listing);
        assert_eq!(deps.iter().collect::<Vec<_>>(), vec!["react", "babel-core"]);
    }

    #[test]
    fn handles_windows_paths() {
        let listing = "C:\\app\r\nC:\\app\\node_modules\\gulp\r\n";
        let deps = parse_dependency_listing(listing);
        assert_eq!(deps.iter().collect::<Vec<_>>(), vec!["gulp"]);
    }

    #[test]
    fn empty_listing_yields_no_dependencies() {
        assert!(parse_dependency_listing("").is_empty());
        assert!(parse_dependency_listing("/home/dev/app\n").is_empty());
    }

    #[test]
    fn collapses_duplicates() {
        let listing = "/app\n/app/node_modules/a\n/other/node_modules/a\n";
        assert_eq!(parse_dependency_listing(listing).len(), 1);
    }
}
