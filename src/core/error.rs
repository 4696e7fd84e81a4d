use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the sync backend.
/// Every module returns `Result<T, SyncError>`.
#[derive(Debug, Error)]
pub enum SyncError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // ── Archive ─────────────────────────────────────────
    #[error("Zip read error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Entry {entry} in {path:?} exceeds {limit} bytes")]
    EntryTooLarge {
        path: PathBuf,
        entry: String,
        limit: u64,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Sync ────────────────────────────────────────────
    #[error("No artifact registered for game version {game_version}")]
    UnregisteredArtifact { game_version: String },

    #[error("Failed to download artifact for {game_version} into {directory:?} from {url}: {source}")]
    DownloadFailed {
        game_version: String,
        directory: PathBuf,
        url: String,
        source: Box<SyncError>,
    },

    // ── Config ──────────────────────────────────────────
    #[error("Invalid configuration at {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type SyncResult<T> = Result<T, SyncError>;

impl SyncError {
    /// Wrap an IO error with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` when the failure stems from a missing registration rather than
    /// a transient transport problem. Retrying will not help.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SyncError::UnregisteredArtifact { .. } | SyncError::Config { .. }
        )
    }
}
