use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::HarnessError;

/// File extension that marks a fixture file.
pub const FIXTURE_EXTENSION: &str = "tests";

/// Recursively scans a directory for `.tests` fixture files.
///
/// The returned list is sorted by full path string so that run output and
/// failure ordering are identical across hosts regardless of directory-entry
/// order. Unreadable directory entries are skipped.
pub fn discover_fixture_files(root: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    if !root.is_dir() {
        return Err(HarnessError::DirectoryNotFound);
    }
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_fixture_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

/// Returns true if the given path has a .tests extension.
fn is_fixture_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == FIXTURE_EXTENSION)
}
