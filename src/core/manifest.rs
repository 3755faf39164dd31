//! Package manifest parsing.
//!
//! The manifest is a plain-text file listing every package of one client
//! version. Only the `.zip` lines are archives; the rest (checksums, sizes,
//! a format header) are ignored.

use crate::error::{BiostrapError, Result};
use crate::utils::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "rbxPkgManifest.txt";
pub const ARCHIVE_SUFFIX: &str = ".zip";
pub const FOLDER_DELIMITER: char = '-';

/// Trimmed manifest lines ending in the archive suffix, in manifest order.
pub fn archive_names(manifest: &str) -> Vec<String> {
    manifest
        .lines()
        .map(str::trim)
        .filter(|line| line.ends_with(ARCHIVE_SUFFIX))
        .map(str::to_string)
        .collect()
}

/// Folder segments for an archive: the file stem split on `-`, empty parts dropped.
///
/// `Foo-Bar-1.0.zip` becomes `["Foo", "Bar", "1.0"]`.
pub fn folder_segments(archive_name: &str) -> Vec<String> {
    let stem = Path::new(archive_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    stem.split(FOLDER_DELIMITER)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Directory an archive is extracted into, below the version folder.
///
/// The name must be a bare file name and every folder segment a plain
/// directory name; anything else is `InvalidArchiveName`.
pub fn extraction_dir(version_dir: &Path, archive_name: &str) -> Result<PathBuf> {
    let invalid = || BiostrapError::InvalidArchiveName {
        name: archive_name.to_string(),
    };

    if archive_name.contains('/') || archive_name.contains('\\') {
        return Err(invalid());
    }

    let segments = folder_segments(archive_name);
    if segments
        .iter()
        .any(|s| s == "." || s == ".." || s.contains(':'))
    {
        return Err(invalid());
    }

    let dir = segments
        .iter()
        .fold(version_dir.to_path_buf(), |dir, segment| dir.join(segment));

    if !fs::normalize_lexically(&dir).starts_with(fs::normalize_lexically(version_dir)) {
        return Err(invalid());
    }

    Ok(dir)
}
