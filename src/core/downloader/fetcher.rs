use std::path::Path;

use async_trait::async_trait;

use crate::core::error::SyncResult;

/// Capability to fetch a remote file into `dest`.
///
/// On success `dest` holds the complete file. On failure `dest` must not
/// have been created. Timeouts are the implementation's concern.
#[async_trait]
pub trait ArtifactFetcher: Send + Sync {
    async fn fetch(&self, url: &str, dest: &Path) -> SyncResult<()>;
}

#[async_trait]
impl<T: ArtifactFetcher + ?Sized> ArtifactFetcher for std::sync::Arc<T> {
    async fn fetch(&self, url: &str, dest: &Path) -> SyncResult<()> {
        (**self).fetch(url, dest).await
    }
}
