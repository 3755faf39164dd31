//! Zip extraction that refuses to write outside the target directory.

use crate::error::{BiostrapError, Result};
use crate::utils::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use zip::ZipArchive;

/// Extract every entry of `archive_path` into `target`.
///
/// Destinations are resolved for all entries before anything is written, so
/// an archive with a single escaping entry leaves the filesystem untouched.
pub fn extract_zip(archive_path: &Path, target: &Path) -> Result<()> {
    fs::ensure_dir_exists(target)?;
    let root = target.canonicalize()?;

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut plan = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        let destination = resolve_destination(&root, entry.name())?;
        let is_dir = entry.is_dir() || destination == root;
        plan.push((destination, is_dir));
    }

    for (i, (destination, is_dir)) in plan.into_iter().enumerate() {
        if is_dir {
            std::fs::create_dir_all(&destination)?;
            continue;
        }

        if let Some(parent) = destination.parent() {
            fs::ensure_dir_exists(parent)?;
        }

        let mut entry = archive.by_index(i)?;
        let mut outfile = File::create(&destination)?;
        std::io::copy(&mut entry, &mut outfile)?;
        log::trace!("Extracted {} -> {destination:?}", entry.name());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&destination, std::fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(())
}

/// Convert both separator styles to the host one and drop leading separators.
pub fn normalize_entry_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect::<String>()
        .trim_start_matches(MAIN_SEPARATOR)
        .to_string()
}

/// Absolute destination of `entry_name` below `root`, or `PathTraversal` if it escapes.
///
/// `root` must already be canonical.
pub fn resolve_destination(root: &Path, entry_name: &str) -> Result<PathBuf> {
    let normalized = normalize_entry_name(entry_name);
    let destination = fs::normalize_lexically(&root.join(normalized));

    if !destination.starts_with(root) {
        return Err(BiostrapError::PathTraversal {
            entry: entry_name.to_string(),
        });
    }

    Ok(destination)
}
