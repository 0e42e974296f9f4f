mod root;
mod types;

pub use root::{resolve_root, RootError};
pub use types::{RenameOperation, WalkError, WalkSummary};

use crate::name::{EntryKind, Name};
use crate::pattern::Rules;
use crate::progress::Progress;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Rename every eligible entry below `root`.
///
/// Subdirectories are processed before the directory entry itself is renamed,
/// so renaming a folder never invalidates paths still to be visited. The first
/// error aborts the walk and leaves earlier renames in place.
pub fn rename_tree(
    root: &Path,
    rules: &Rules,
    progress: &mut Progress,
) -> Result<WalkSummary, WalkError> {
    info!("Renaming entries under {}", root.display());

    let mut summary = WalkSummary::default();
    walk(root, rules, progress, &mut summary)?;

    debug!(
        renamed = summary.len(),
        skipped = summary.skipped,
        non_utf8 = summary.non_utf8,
        unchanged = summary.unchanged,
        "Walk complete"
    );

    Ok(summary)
}

fn walk(
    dir: &Path,
    rules: &Rules,
    progress: &mut Progress,
    summary: &mut WalkSummary,
) -> Result<(), WalkError> {
    debug!(path = ?dir, "Visiting directory");

    for entry in read_sorted(dir)? {
        let path = dir.join(&entry);

        if path.is_dir() {
            walk(&path, rules, progress, summary)?;
        }

        // Non UTF-8 names cannot be normalized; their subtree was still visited
        let Some(raw) = entry.to_str() else {
            if path.is_file() || path.is_dir() {
                warn!("Leaving entry with non UTF-8 name: {:?}", path);
                summary.non_utf8 += 1;
            }
            continue;
        };

        if path.is_file() {
            let mut name = Name::new(raw, EntryKind::File, rules)?;

            let eligible = name
                .ext()
                .is_some_and(|ext| rules.config().is_renamable_extension(ext));
            if !eligible {
                trace!(name = %raw, "Skipping file with ineligible extension");
                summary.skipped += 1;
                continue;
            }

            name.to_pascal();
            name.translate_suffix()?;
            apply_rename(dir, raw, &name, progress, summary)?;
        } else if path.is_dir() {
            if rules.config().rename_folders {
                let mut name = Name::new(raw, EntryKind::Folder, rules)?;
                name.to_pascal();
                apply_rename(dir, raw, &name, progress, summary)?;
            }
        } else {
            trace!(path = ?path, "Skipping entry that is neither file nor directory");
        }
    }

    Ok(())
}

/// Entry names of a directory in a stable order
fn read_sorted(dir: &Path) -> Result<Vec<OsString>, WalkError> {
    let read_dir = fs::read_dir(dir).map_err(|source| WalkError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| WalkError::Read {
            path: dir.to_path_buf(),
            source,
        })?;

        names.push(entry.file_name());
    }

    names.sort();
    Ok(names)
}

fn apply_rename(
    dir: &Path,
    original: &str,
    name: &Name<'_>,
    progress: &mut Progress,
    summary: &mut WalkSummary,
) -> Result<(), WalkError> {
    let new_name = name.to_string();

    if new_name == original {
        trace!(name = %original, "Name already normalized");
        summary.unchanged += 1;
        return Ok(());
    }

    let op = RenameOperation::new(dir.join(original), new_name, name.kind());

    fs::rename(&op.source_path, &op.destination_path).map_err(|source| WalkError::Rename {
        from: op.source_path.clone(),
        to: op.destination_path.clone(),
        source,
    })?;

    info!(
        "Renamed {}: {} -> {}",
        op.kind.description(),
        op.source_name,
        op.destination_name
    );
    progress.renamed(op.kind, &op.source_name, &op.destination_name);

    summary.add_operation(op);
    Ok(())
}
