use std::fmt;
use std::path::PathBuf;

use crate::core::archive::CandidateStatus;

/// Why a sync had to fetch the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadReason {
    /// The managed directory did not exist and was created.
    MissingDirectory,
    /// The directory held no archive.
    Empty,
    /// More than one archive was found; the directory was reset.
    Indeterminate { found: usize },
    /// The single archive was not the expected artifact and was deleted.
    Replaced { status: CandidateStatus },
}

impl fmt::Display for DownloadReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadReason::MissingDirectory => write!(f, "managed directory was missing"),
            DownloadReason::Empty => write!(f, "no artifact installed"),
            DownloadReason::Indeterminate { found } => {
                write!(f, "{} archives found, directory reset", found)
            }
            DownloadReason::Replaced { status } => write!(f, "existing archive {}", status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// The installed archive matched; nothing was fetched.
    AlreadyCurrent,
    Downloaded { reason: DownloadReason },
}

/// Result of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Absolute path of the verified or freshly downloaded artifact.
    pub path: PathBuf,
    pub action: SyncAction,
}
