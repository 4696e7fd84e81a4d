use std::path::{Path, PathBuf};

use super::record::ArtifactRecord;
use crate::core::config::SyncConfig;

/// Naming rules for files inside a managed directory and on the CDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    cdn_base_url: String,
    project_id: String,
    mod_id: String,
    loader: String,
    archive_extension: String,
    manifest_entry: String,
    sentinel_name: String,
}

impl ArtifactLayout {
    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            cdn_base_url: config.cdn_base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            mod_id: config.mod_id.clone(),
            loader: config.loader.clone(),
            archive_extension: config.archive_extension.trim_start_matches('.').to_string(),
            manifest_entry: config.manifest_entry.clone(),
            sentinel_name: config.sentinel_name.clone(),
        }
    }

    /// Identifier the archive manifest must declare.
    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }

    /// Archive entry holding the mod metadata.
    pub fn manifest_entry(&self) -> &str {
        &self.manifest_entry
    }

    /// Build the artifact filename.
    ///
    /// `<mod_id>-<loader>-<artifact_version>-mc<game_version>.<ext>`
    pub fn file_name(&self, record: &ArtifactRecord) -> String {
        format!(
            "{}-{}-{}-mc{}.{}",
            self.mod_id,
            self.loader,
            record.artifact_version,
            record.game_version,
            self.archive_extension
        )
    }

    /// Construct the download URL for a record.
    ///
    /// Template:
    /// `<cdn>/data/<project_id>/versions/<remote_version_id>/<file_name>`
    pub fn download_url(&self, record: &ArtifactRecord) -> String {
        format!(
            "{}/data/{}/versions/{}/{}",
            self.cdn_base_url,
            self.project_id,
            record.remote_version_id,
            self.file_name(record)
        )
    }

    pub fn target_path(&self, directory: &Path, record: &ArtifactRecord) -> PathBuf {
        directory.join(self.file_name(record))
    }

    pub fn sentinel_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.sentinel_name)
    }

    /// Whether `path` carries the recognized archive extension.
    pub fn is_candidate(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| {
                name.to_string_lossy()
                    .ends_with(&format!(".{}", self.archive_extension))
            })
            .unwrap_or(false)
    }
}
