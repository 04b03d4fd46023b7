use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{Result, SnapError};

pub(crate) fn read_store_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SnapError::io_operation("read store", path.display(), e))
}

/// Replace `path` with `contents` so readers never see a partial file.
///
/// Each call writes its own uniquely named temp file in the target's
/// directory, syncs it, then renames it over the target. Concurrent writers
/// are not coordinated; last rename wins.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    // Dropping the temp file on any error path removes it
    let mut temp = Builder::new()
        .prefix(".snapnotes-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| SnapError::io_operation("create temp file in", dir.display(), e))?;

    if let Err(e) = write_and_sync(&mut temp, contents) {
        return Err(SnapError::io_operation("write", temp.path().display(), e));
    }

    temp.persist(path)
        .map_err(|e| SnapError::io_operation("replace", path.display(), e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "replaced store file");
    Ok(())
}

fn write_and_sync(temp: &mut NamedTempFile, contents: &[u8]) -> std::io::Result<()> {
    temp.write_all(contents)?;
    temp.flush()?;
    temp.as_file().sync_all()
}
