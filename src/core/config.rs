// ─── Sync Configuration ───
// Settings persisted as JSON. Every field has a default so a missing or
// partial file still yields a working configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::{SyncError, SyncResult};
use crate::core::http::APP_USER_AGENT;

const APP_DIR_NAME: &str = "skinlayers-sync";
const CONFIG_FILE: &str = "config.json";

/// An additional artifact registration supplied through the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    pub game_version: String,
    pub remote_version_id: String,
    /// Falls back to [`SyncConfig::default_artifact_version`] when omitted.
    #[serde(default)]
    pub artifact_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Base host of the CDN serving artifact files.
    pub cdn_base_url: String,
    /// Remote project identifier the artifact versions belong to.
    pub project_id: String,
    /// Expected `id` inside the archive manifest; also the filename prefix.
    pub mod_id: String,
    pub loader: String,
    pub archive_extension: String,
    pub manifest_entry: String,
    pub sentinel_name: String,
    /// Name of the managed directory created inside the host's mod directory.
    pub managed_subdirectory: String,
    pub default_artifact_version: String,
    pub user_agent: String,
    pub extra_artifacts: Vec<ArtifactEntry>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: "https://cdn.modrinth.com".to_string(),
            project_id: "zV5r3pPn".to_string(),
            mod_id: "skinlayers3d".to_string(),
            loader: "fabric".to_string(),
            archive_extension: "jar".to_string(),
            manifest_entry: "fabric.mod.json".to_string(),
            sentinel_name: "this is not a mod directory".to_string(),
            managed_subdirectory: "skinlayers3d".to_string(),
            default_artifact_version: "1.6.2".to_string(),
            user_agent: APP_USER_AGENT.to_string(),
            extra_artifacts: Vec::new(),
        }
    }
}

impl SyncConfig {
    /// Location of the config file under the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE)
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// an error: silently ignoring it would hide a broken registration.
    pub fn load(path: &Path) -> SyncResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(SyncError::io(path, e)),
        };

        let config: SyncConfig = serde_json::from_str(&raw).map_err(|e| SyncError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate(path)?;

        info!(
            path = %path.display(),
            extra_artifacts = config.extra_artifacts.len(),
            "Loaded sync configuration"
        );
        Ok(config)
    }

    fn validate(&self, path: &Path) -> SyncResult<()> {
        let required = [
            ("cdn_base_url", &self.cdn_base_url),
            ("project_id", &self.project_id),
            ("mod_id", &self.mod_id),
            ("archive_extension", &self.archive_extension),
            ("manifest_entry", &self.manifest_entry),
            ("sentinel_name", &self.sentinel_name),
            ("managed_subdirectory", &self.managed_subdirectory),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SyncError::Config {
                    path: path.to_path_buf(),
                    reason: format!("`{}` must not be empty", field),
                });
            }
        }

        // The sentinel must never be mistaken for a candidate archive.
        if self
            .sentinel_name
            .ends_with(&format!(".{}", self.archive_extension))
        {
            return Err(SyncError::Config {
                path: path.to_path_buf(),
                reason: "`sentinel_name` must not use the archive extension".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SyncConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "cdn_base_url": "https://mirror.example",
                "extra_artifacts": [
                    { "game_version": "1.20.6", "remote_version_id": "abcd1234" }
                ]
            }"#,
        )
        .unwrap();

        let config = SyncConfig::load(&path).unwrap();
        assert_eq!(config.cdn_base_url, "https://mirror.example");
        assert_eq!(config.mod_id, "skinlayers3d");
        assert_eq!(config.extra_artifacts.len(), 1);
        assert_eq!(config.extra_artifacts[0].artifact_version, None);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SyncConfig::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::Config { .. }));
    }

    #[test]
    fn sentinel_with_archive_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "sentinel_name": "marker.jar" }"#).unwrap();

        let err = SyncConfig::load(&path).unwrap_err();
        assert!(err.is_configuration_error());
    }
}
