use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use super::LoadError;

// Same rules as a shell glob run inside the directory: `*` never crosses a
// separator and never matches a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// List the entries of `dir` whose names match `pattern`, sorted by file
/// name.
///
/// Entries are not filtered by type: a matching directory is returned and
/// fails when it is read.
///
/// The order returned here is the series and legend order of the figure,
/// so it must not depend on directory iteration order.
pub fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    let pattern = Pattern::new(pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::debug!("Skipping non UTF-8 file name {:?}", entry.path());
            continue;
        };
        if pattern.matches_with(name, MATCH_OPTIONS) {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::info!(
        "Found {} file(s) matching '{}' in {}",
        files.len(),
        pattern.as_str(),
        dir.display()
    );
    Ok(files)
}
