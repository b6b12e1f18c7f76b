//! File system utilities for locating save files

use anyhow::Result;
use std::path::{Path, PathBuf};

// Saves sometimes sit one level down in per-slot directories.
const MAX_SAVE_DEPTH: usize = 2;

/// Collect .sav files under a profile directory, sorted for stable output.
pub fn collect_save_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(path)
        .max_depth(MAX_SAVE_DEPTH)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file_path = entry.path();

        let matches = file_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("sav"))
            .unwrap_or(false);

        if matches {
            files.push(file_path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Pick the most recently modified save, falling back to name order when
/// modification times are unavailable.
pub fn newest_save(files: Vec<PathBuf>) -> Option<PathBuf> {
    files
        .into_iter()
        .enumerate()
        .max_by_key(|(index, path)| {
            let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();
            (modified, std::cmp::Reverse(*index))
        })
        .map(|(_, path)| path)
}
