use std::path::Path;
use anyhow::Result;

pub fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("No usable file stem in {}", path.display()))
}

/// Matches file names the way a `*.json` glob does: case-sensitive, and a
/// bare `.json` counts.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{}", extension);
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(&suffix))
}
