// ─── Mod Loader Discovery ───
// Hands the synced artifact to the host's mod loader when it scans for mods.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error};

use crate::core::downloader::ArtifactFetcher;
use crate::core::sync::ArtifactSynchronizer;

/// Loader id of Fabric as reported by the host.
pub const FABRIC_LOADER_ID: &str = "fabricloader";

/// A mod loader is about to discover mods.
#[derive(Debug, Clone)]
pub struct DiscoveryEvent {
    pub loader_id: String,
    /// Candidate mod directories, best first.
    pub mod_directories: Vec<PathBuf>,
    pub game_version: String,
}

pub struct ModLoaderDiscovery<F> {
    synchronizer: Arc<ArtifactSynchronizer<F>>,
    managed_subdirectory: String,
}

impl<F: ArtifactFetcher> ModLoaderDiscovery<F> {
    pub fn new(
        synchronizer: Arc<ArtifactSynchronizer<F>>,
        managed_subdirectory: impl Into<String>,
    ) -> Self {
        Self {
            synchronizer,
            managed_subdirectory: managed_subdirectory.into(),
        }
    }

    /// Sync the artifact into `<first mod dir>/<managed_subdirectory>` and
    /// return the file to add to the loader's discovery.
    ///
    /// Returns `None` for non-Fabric loaders and on any failure; a broken
    /// sync must never abort the host's mod discovery.
    pub async fn on_discover(&self, event: &DiscoveryEvent) -> Option<PathBuf> {
        if event.loader_id != FABRIC_LOADER_ID {
            debug!(loader = %event.loader_id, "Ignoring discovery for non-Fabric loader");
            return None;
        }

        let Some(mod_directory) = event.mod_directories.first() else {
            error!("Could not find mod directory. Skipping artifact installation");
            return None;
        };

        // Own subfolder so resets never touch the user's other mods.
        let managed = mod_directory.join(&self.managed_subdirectory);
        match self
            .synchronizer
            .ensure_synced(&event.game_version, &managed)
            .await
        {
            Ok(path) => Some(path),
            Err(e) => {
                error!(
                    game_version = %event.game_version,
                    directory = %managed.display(),
                    "Failed to load artifact: {}",
                    e
                );
                None
            }
        }
    }
}
