use serde::{Deserialize, Serialize};
use std::fmt;

/// One downloadable release of the artifact, pinned to a game version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ArtifactRecord {
    /// Client version the artifact targets (e.g. `"1.20.1"`). Registry key.
    pub game_version: String,
    /// Opaque identifier of the release on the CDN.
    pub remote_version_id: String,
    /// Release of the artifact itself, independent of the game version.
    pub artifact_version: String,
}

impl ArtifactRecord {
    pub fn new(
        game_version: impl Into<String>,
        remote_version_id: impl Into<String>,
        artifact_version: impl Into<String>,
    ) -> Self {
        Self {
            game_version: game_version.into(),
            remote_version_id: remote_version_id.into(),
            artifact_version: artifact_version.into(),
        }
    }

    /// Version string an installed copy must report in its manifest.
    ///
    /// `<game_version>-<artifact_version>`, compared by exact equality.
    pub fn fingerprint(&self) -> String {
        format!("{}-{}", self.game_version, self.artifact_version)
    }
}

impl fmt::Display for ArtifactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} ({})",
            self.artifact_version, self.game_version, self.remote_version_id
        )
    }
}
