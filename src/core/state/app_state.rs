use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::core::artifact::{builtin_registry, ArtifactLayout};
use crate::core::config::SyncConfig;
use crate::core::discovery::ModLoaderDiscovery;
use crate::core::downloader::Downloader;
use crate::core::error::SyncResult;
use crate::core::sync::ArtifactSynchronizer;

/// Everything built once at startup: config, frozen registry, HTTP
/// downloader, and the synchronizer sharing them.
pub struct AppState {
    pub config: SyncConfig,
    pub synchronizer: Arc<ArtifactSynchronizer<Downloader>>,
}

impl AppState {
    pub fn new(config: SyncConfig) -> SyncResult<Self> {
        let registry = Arc::new(builtin_registry(&config));
        let layout = ArtifactLayout::from_config(&config);
        let downloader = Downloader::new(&config.user_agent)?;

        info!(
            artifacts = registry.len(),
            project = %config.project_id,
            "Artifact registry initialized"
        );

        Ok(Self {
            synchronizer: Arc::new(ArtifactSynchronizer::new(registry, layout, downloader)),
            config,
        })
    }

    /// Load the config from `config_path`, or the default location when `None`.
    pub fn load(config_path: Option<&Path>) -> SyncResult<Self> {
        let config = match config_path {
            Some(path) => SyncConfig::load(path)?,
            None => SyncConfig::load(&SyncConfig::default_path())?,
        };
        Self::new(config)
    }

    pub fn discovery(&self) -> ModLoaderDiscovery<Downloader> {
        ModLoaderDiscovery::new(
            self.synchronizer.clone(),
            self.config.managed_subdirectory.clone(),
        )
    }
}
