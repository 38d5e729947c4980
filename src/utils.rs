// ABOUTME: Utility functions for the deckgen library
// ABOUTME: Provides helpers for validation, directory creation and image discovery

use crate::errors::{DeckError, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(DeckError::FileReadError)?;
    } else if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

/// Find images in `dir` matching a glob `pattern`, sorted by path
pub fn find_images(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    validate_directory_exists(dir)?;

    let glob_pattern = format!("{}/{}", dir.to_string_lossy(), pattern);
    let mut paths: Vec<PathBuf> = glob::glob(&glob_pattern)
        .map_err(|e| DeckError::ConfigError(format!("Invalid glob pattern: {}", e)))?
        .flatten()
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    info!("Found {} images matching {}", paths.len(), glob_pattern);

    if paths.is_empty() {
        return Err(DeckError::NoImagesFoundError(glob_pattern));
    }

    Ok(paths)
}
