pub mod commands;
pub mod core;

pub use crate::core::archive::{read_entry, CandidateStatus, InvalidReason, ModManifest};
pub use crate::core::artifact::{ArtifactLayout, ArtifactRecord, ArtifactRegistry};
pub use crate::core::config::SyncConfig;
pub use crate::core::discovery::{DiscoveryEvent, ModLoaderDiscovery};
pub use crate::core::downloader::{ArtifactFetcher, Downloader};
pub use crate::core::error::{SyncError, SyncResult};
pub use crate::core::state::AppState;
pub use crate::core::sync::{ArtifactSynchronizer, DownloadReason, SyncAction, SyncReport};
