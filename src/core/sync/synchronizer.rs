use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::locks::DirectoryLocks;
use super::report::{DownloadReason, SyncAction, SyncReport};
use crate::core::archive::{inspect_candidate, CandidateStatus};
use crate::core::artifact::{ArtifactLayout, ArtifactRecord, ArtifactRegistry};
use crate::core::downloader::ArtifactFetcher;
use crate::core::error::{SyncError, SyncResult};

/// What the managed directory looked like before any download.
enum DirectoryState {
    Current(PathBuf),
    NeedsDownload(DownloadReason),
}

/// Reconciles a managed directory to hold exactly one verified artifact.
pub struct ArtifactSynchronizer<F> {
    registry: Arc<ArtifactRegistry>,
    layout: ArtifactLayout,
    fetcher: F,
    locks: DirectoryLocks,
}

impl<F: ArtifactFetcher> ArtifactSynchronizer<F> {
    pub fn new(registry: Arc<ArtifactRegistry>, layout: ArtifactLayout, fetcher: F) -> Self {
        Self {
            registry,
            layout,
            fetcher,
            locks: DirectoryLocks::new(),
        }
    }

    pub fn registry(&self) -> &ArtifactRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Make sure `directory` holds the artifact for `game_version` and return
    /// its absolute path.
    pub async fn ensure_synced(&self, game_version: &str, directory: &Path) -> SyncResult<PathBuf> {
        self.ensure_synced_detailed(game_version, directory)
            .await
            .map(|report| report.path)
    }

    /// Same as [`ensure_synced`](Self::ensure_synced), reporting what was done.
    ///
    /// Flow:
    /// - directory missing → create it, download
    /// - no archive → download
    /// - several archives → wipe the directory, download
    /// - one archive → keep it if its manifest matches, else delete and download
    pub async fn ensure_synced_detailed(
        &self,
        game_version: &str,
        directory: &Path,
    ) -> SyncResult<SyncReport> {
        // Resolved first so an unknown version never touches the disk.
        let record = self
            .registry
            .get(game_version)
            .ok_or_else(|| SyncError::UnregisteredArtifact {
                game_version: game_version.to_string(),
            })?;

        let directory =
            std::path::absolute(directory).map_err(|e| SyncError::io(directory, e))?;
        let _guard = self.locks.acquire(&directory).await;

        let reason = match self.inspect_directory(record, &directory).await? {
            DirectoryState::Current(path) => {
                info!(
                    game_version,
                    path = %path.display(),
                    "Installed artifact is up to date"
                );
                return Ok(SyncReport {
                    path,
                    action: SyncAction::AlreadyCurrent,
                });
            }
            DirectoryState::NeedsDownload(reason) => reason,
        };

        debug!(game_version, %reason, "Artifact download required");
        let path = self.download(record, &directory).await?;

        Ok(SyncReport {
            path,
            action: SyncAction::Downloaded { reason },
        })
    }

    async fn inspect_directory(
        &self,
        record: &ArtifactRecord,
        directory: &Path,
    ) -> SyncResult<DirectoryState> {
        let exists = tokio::fs::try_exists(directory)
            .await
            .map_err(|e| SyncError::io(directory, e))?;
        if !exists {
            create_dir(directory).await?;
            return Ok(DirectoryState::NeedsDownload(
                DownloadReason::MissingDirectory,
            ));
        }

        let mut candidates = self.list_candidates(directory).await?;

        match candidates.len() {
            0 => Ok(DirectoryState::NeedsDownload(DownloadReason::Empty)),
            1 => {
                let candidate = candidates.remove(0);
                self.validate_candidate(record, candidate).await
            }
            found => {
                // Someone put files in here; start over from an empty directory.
                warn!(
                    directory = %directory.display(),
                    found,
                    "Managed directory holds several archives, resetting it"
                );
                tokio::fs::remove_dir_all(directory)
                    .await
                    .map_err(|e| SyncError::io(directory, e))?;
                create_dir(directory).await?;
                Ok(DirectoryState::NeedsDownload(
                    DownloadReason::Indeterminate { found },
                ))
            }
        }
    }

    async fn validate_candidate(
        &self,
        record: &ArtifactRecord,
        candidate: PathBuf,
    ) -> SyncResult<DirectoryState> {
        let expected = record.fingerprint();
        let status = inspect_candidate(&candidate, &self.layout, &expected);

        match &status {
            CandidateStatus::Valid => return Ok(DirectoryState::Current(candidate)),
            CandidateStatus::Invalid(reason) => {
                info!(
                    path = %candidate.display(),
                    %reason,
                    "Installed artifact is outdated or foreign, updating"
                );
            }
            CandidateStatus::Unverifiable(reason) => {
                warn!(
                    path = %candidate.display(),
                    %reason,
                    "Could not read manifest of installed artifact to verify it"
                );
            }
        }

        remove_entry(&candidate).await?;
        Ok(DirectoryState::NeedsDownload(DownloadReason::Replaced {
            status,
        }))
    }

    async fn list_candidates(&self, directory: &Path) -> SyncResult<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(directory)
            .await
            .map_err(|e| SyncError::io(directory, e))?;

        let mut candidates = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SyncError::io(directory, e))?
        {
            let path = entry.path();
            if self.layout.is_candidate(&path) {
                candidates.push(path);
            }
        }
        candidates.sort();

        Ok(candidates)
    }

    async fn download(&self, record: &ArtifactRecord, directory: &Path) -> SyncResult<PathBuf> {
        let target = self.layout.target_path(directory, record);
        let url = self.layout.download_url(record);

        info!(
            game_version = %record.game_version,
            artifact_version = %record.artifact_version,
            "Downloading artifact {}...",
            record.fingerprint()
        );

        self.fetcher
            .fetch(&url, &target)
            .await
            .map_err(|source| SyncError::DownloadFailed {
                game_version: record.game_version.clone(),
                directory: directory.to_path_buf(),
                url: url.clone(),
                source: Box::new(source),
            })?;

        self.mark_managed(directory).await;

        info!(
            path = %target.display(),
            "Successfully downloaded artifact {}",
            record.fingerprint()
        );
        Ok(target)
    }

    /// Drop the marker telling users not to put files here. Failure is logged only.
    async fn mark_managed(&self, directory: &Path) {
        let sentinel = self.layout.sentinel_path(directory);
        let result = tokio::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .open(&sentinel)
            .await;

        if let Err(e) = result {
            warn!(
                path = %sentinel.display(),
                error = %e,
                "Failed to create managed directory marker"
            );
        }
    }
}

async fn create_dir(path: &Path) -> SyncResult<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| SyncError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn remove_entry(path: &Path) -> SyncResult<()> {
    let metadata = tokio::fs::symlink_metadata(path)
        .await
        .map_err(|e| SyncError::io(path, e))?;

    let result = if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };
    result.map_err(|e| SyncError::io(path, e))
}
