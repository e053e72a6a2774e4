//! Atomic file replacement.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Write `contents` to a temp file next to `path`, then rename it over
/// `path`. Readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Byte-for-byte atomic copy.
pub fn copy_atomic(from: &Path, to: &Path) -> Result<(), StoreError> {
    let contents = fs::read(from)?;
    write_atomic(to, &contents)
}

/// Whether the file content begins with `prefix`. Only reads the prefix.
pub fn file_starts_with(path: &Path, prefix: &str) -> Result<bool, StoreError> {
    let mut head = Vec::with_capacity(prefix.len());
    fs::File::open(path)?
        .take(prefix.len() as u64)
        .read_to_end(&mut head)?;
    Ok(head == prefix.as_bytes())
}
