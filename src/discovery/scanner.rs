//! File system scanner for source flags.
//!
//! Lists the `.svg` files directly inside the input directory, sorted by
//! file name. Subdirectories are not descended into. File names that are
//! not valid UTF-8 are kept and matched lossily.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FlagError, Result};

use super::manifest::Manifest;

/// Extension (including the dot) of source flag files.
pub const SVG_EXTENSION: &str = ".svg";

/// Scan a directory for flag SVGs, sorted by file name.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(FlagError::Io {
            path: root.to_path_buf(),
            message: "Flag directory does not exist".to_string(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FlagError::Io {
            path: root.to_path_buf(),
            message: format!("Failed to read flag directory: {}", e),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let keep = {
            let filename = entry.file_name().to_string_lossy();
            is_flag_file(&filename) && !manifest.is_excluded(&filename)
        };
        if !keep {
            continue;
        }

        if entry.file_name().to_str().is_none() {
            tracing::warn!(
                "{} is not valid UTF-8, its identifier will contain replacement characters",
                entry.path().display()
            );
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// Check whether a file name looks like a source flag.
pub fn is_flag_file(filename: &str) -> bool {
    filename.ends_with(SVG_EXTENSION)
}
