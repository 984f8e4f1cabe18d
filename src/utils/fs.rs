//! File system helpers.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::core::{FileOperation, FileResultExt};

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).with_file_context(
        FileOperation::CreateDir,
        path,
        "preparing the output directory",
    )?;
    Ok(())
}

/// Write `content` to `path` atomically.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers never see a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_file_context(FileOperation::Write, parent, "creating a temporary file")?;
    temp.write_all(content)
        .with_file_context(FileOperation::Write, temp.path(), "writing a temporary file")?;
    temp.as_file().sync_all().context("Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_file_context(FileOperation::Write, path, "replacing the file")?;
    Ok(())
}
