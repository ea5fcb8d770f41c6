//! Atomic file writes
//!
//! Content goes to a temp file in the destination directory, which is then
//! renamed over the target, so readers never observe a half-written file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::LinksResult;

pub fn atomic_write(path: &Path, content: &[u8]) -> LinksResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
