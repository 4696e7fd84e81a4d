mod locks;
mod report;
mod synchronizer;

pub use locks::DirectoryLocks;
pub use report::{DownloadReason, SyncAction, SyncReport};
pub use synchronizer::ArtifactSynchronizer;
