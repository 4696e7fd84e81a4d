use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per managed directory.
///
/// Serializes syncs that target the same directory so two callers never
/// both observe an empty directory and download twice. Keys are expected to
/// be absolute paths. Entries nobody holds or waits on are pruned on the next
/// acquire.
#[derive(Debug, Default)]
pub struct DirectoryLocks {
    locks: Mutex<HashMap<PathBuf, Arc<AsyncMutex<()>>>>,
}

impl DirectoryLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `directory`. Released when the guard drops.
    pub async fn acquire(&self, directory: &Path) -> OwnedMutexGuard<()> {
        let lock = {
            // The map is only touched here; a poisoned guard still holds a
            // consistent map.
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(directory.to_path_buf()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
