use crate::name::{EntryKind, NameError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Failed to read directory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Name(#[from] NameError),

    #[error("Rename failed: {} -> {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single rename that was performed
#[derive(Debug, Clone)]
pub struct RenameOperation {
    /// Full path of the entry before renaming
    pub source_path: PathBuf,
    /// Original entry name
    pub source_name: String,
    /// Full path after renaming
    pub destination_path: PathBuf,
    /// New entry name
    pub destination_name: String,
    pub kind: EntryKind,
}

impl RenameOperation {
    pub fn new(source_path: PathBuf, destination_name: String, kind: EntryKind) -> Self {
        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
            kind,
        }
    }
}

/// Outcome of a completed walk
#[derive(Debug, Clone, Default)]
pub struct WalkSummary {
    /// Renames in the order they were performed
    pub operations: Vec<RenameOperation>,
    /// Files left alone because of their extension
    pub skipped: usize,
    /// Entries whose normalized name equals the current one
    pub unchanged: usize,
    /// Entries left alone because their name is not valid UTF-8
    pub non_utf8: usize,
}

impl WalkSummary {
    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    pub fn count(&self, kind: EntryKind) -> usize {
        self.operations.iter().filter(|op| op.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}
