use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RootError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to resolve path: {0}")]
    IoError(#[from] std::io::Error),
}

/// Resolve the walk root to an absolute real path
pub fn resolve_root(target: &Path) -> Result<PathBuf, RootError> {
    let resolved = fs::canonicalize(target).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => RootError::PathNotFound(target.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => {
            RootError::PermissionDenied(target.to_path_buf())
        }
        _ => RootError::IoError(e),
    })?;

    if !resolved.is_dir() {
        return Err(RootError::NotADirectory(resolved));
    }

    debug!(path = ?resolved, "Resolved root directory");
    Ok(resolved)
}
