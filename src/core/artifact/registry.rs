use std::collections::BTreeMap;

use tracing::debug;

use super::record::ArtifactRecord;
use crate::core::config::SyncConfig;

/// Collects registrations during startup. Consumed by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ArtifactRegistryBuilder {
    default_artifact_version: String,
    records: BTreeMap<String, ArtifactRecord>,
}

impl ArtifactRegistryBuilder {
    pub fn new(default_artifact_version: impl Into<String>) -> Self {
        Self {
            default_artifact_version: default_artifact_version.into(),
            records: BTreeMap::new(),
        }
    }

    /// Register a release for `game_version`. A later registration for the
    /// same key replaces the earlier one.
    pub fn register(
        mut self,
        game_version: impl Into<String>,
        remote_version_id: impl Into<String>,
        artifact_version: impl Into<String>,
    ) -> Self {
        let record = ArtifactRecord::new(game_version, remote_version_id, artifact_version);
        if let Some(previous) = self.records.insert(record.game_version.clone(), record) {
            debug!("Overriding artifact registration {}", previous);
        }
        self
    }

    /// Register a release at the default artifact version.
    pub fn register_default(
        self,
        game_version: impl Into<String>,
        remote_version_id: impl Into<String>,
    ) -> Self {
        let version = self.default_artifact_version.clone();
        self.register(game_version, remote_version_id, version)
    }

    /// Apply the `extra_artifacts` of a config on top of what is registered.
    pub fn register_from_config(self, config: &SyncConfig) -> Self {
        config.extra_artifacts.iter().fold(self, |builder, entry| {
            match &entry.artifact_version {
                Some(version) => builder.register(
                    entry.game_version.clone(),
                    entry.remote_version_id.clone(),
                    version.clone(),
                ),
                None => builder.register_default(
                    entry.game_version.clone(),
                    entry.remote_version_id.clone(),
                ),
            }
        })
    }

    pub fn build(self) -> ArtifactRegistry {
        ArtifactRegistry {
            records: self.records,
        }
    }
}

/// Read-only table of known artifacts keyed by game version.
///
/// Built once at startup and shared by reference; there is no way to mutate
/// it afterwards.
#[derive(Debug, Clone, Default)]
pub struct ArtifactRegistry {
    records: BTreeMap<String, ArtifactRecord>,
}

impl ArtifactRegistry {
    pub fn builder(default_artifact_version: impl Into<String>) -> ArtifactRegistryBuilder {
        ArtifactRegistryBuilder::new(default_artifact_version)
    }

    pub fn get(&self, game_version: &str) -> Option<&ArtifactRecord> {
        self.records.get(game_version)
    }

    pub fn contains(&self, game_version: &str) -> bool {
        self.records.contains_key(game_version)
    }

    /// Records ordered by game version key.
    pub fn iter(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
