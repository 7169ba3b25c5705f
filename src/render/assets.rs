use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Remove and recreate the output directory. Must complete before any page
/// is written.
pub(super) fn reset_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("failed to remove directory {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to recreate {}", dir.display()))
}

/// Copy every file under `source` into `destination`, preserving relative
/// paths. A missing source directory copies nothing.
pub(super) fn copy_tree(source: &Path, destination: &Path) -> Result<usize> {
    if !source.exists() {
        return Ok(0);
    }

    let mut copied = 0usize;
    for entry in WalkDir::new(source) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(source).unwrap();
        let target = destination.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target).with_context(|| {
            format!(
                "failed to copy static asset from {} to {}",
                entry.path().display(),
                target.display()
            )
        })?;
        copied += 1;
    }

    Ok(copied)
}

/// Copy standalone `.html` pages verbatim into the output tree. These are
/// finished documents, not templates; no substitution runs over them.
pub(super) fn copy_passthrough_pages(pages_dir: &Path, destination: &Path) -> Result<usize> {
    if !pages_dir.exists() {
        return Ok(0);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(pages_dir) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
        {
            files.push(entry.into_path());
        }
    }
    files.sort();

    for path in &files {
        let relative = path.strip_prefix(pages_dir).unwrap();
        let target = destination.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::copy(path, &target).with_context(|| {
            format!(
                "failed to copy page from {} to {}",
                path.display(),
                target.display()
            )
        })?;
    }

    Ok(files.len())
}
