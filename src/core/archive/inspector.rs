use std::io::Read;
use std::path::Path;

use zip::result::ZipError;

use crate::core::error::{SyncError, SyncResult};

/// Upper bound on the bytes read from a single entry. Mod manifests are a
/// few KiB; the size recorded in the archive itself is not trusted.
pub const MAX_ENTRY_BYTES: u64 = 1 << 20;

/// Read a single entry out of a zip archive without extracting the rest.
///
/// Returns `Ok(None)` when the archive is readable but has no entry named
/// `entry_name`. A missing, corrupt or truncated archive is an error, and so
/// is an entry larger than [`MAX_ENTRY_BYTES`].
pub fn read_entry(archive_path: &Path, entry_name: &str) -> SyncResult<Option<Vec<u8>>> {
    let file = std::fs::File::open(archive_path).map_err(|e| SyncError::io(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut entry = match archive.by_name(entry_name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut bytes = Vec::new();
    (&mut entry)
        .take(MAX_ENTRY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| SyncError::io(archive_path, e))?;

    if bytes.len() as u64 > MAX_ENTRY_BYTES {
        return Err(SyncError::EntryTooLarge {
            path: archive_path.to_path_buf(),
            entry: entry_name.to_string(),
            limit: MAX_ENTRY_BYTES,
        });
    }

    Ok(Some(bytes))
}
