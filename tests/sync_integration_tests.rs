use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use skinlayers_sync_lib::{
    ArtifactFetcher, ArtifactLayout, ArtifactRegistry, ArtifactSynchronizer, SyncAction,
    SyncConfig, SyncError, SyncResult,
};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

const SENTINEL: &str = "this is not a mod directory";

fn write_mod_jar(path: &Path, id: &str, version: &str) {
    let manifest = serde_json::json!({ "schemaVersion": 1, "id": id, "version": version });
    let mut writer = zip::ZipWriter::new(std::fs::File::create(path).unwrap());
    writer
        .start_file("fabric.mod.json", SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all(manifest.to_string().as_bytes())
        .unwrap();
    writer.finish().unwrap();
}

/// Serves a jar whose manifest version is derived from the requested file
/// name, the way the real CDN would.
#[derive(Default)]
struct CdnStub {
    requests: Mutex<Vec<String>>,
}

impl CdnStub {
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactFetcher for CdnStub {
    async fn fetch(&self, url: &str, dest: &Path) -> SyncResult<()> {
        self.requests.lock().unwrap().push(url.to_string());

        // skinlayers3d-fabric-<artifact>-mc<game>.jar
        let name = url.rsplit('/').next().unwrap().trim_end_matches(".jar");
        let (artifact, game) = name
            .trim_start_matches("skinlayers3d-fabric-")
            .split_once("-mc")
            .unwrap();
        write_mod_jar(dest, "skinlayers3d", &format!("{}-{}", game, artifact));
        Ok(())
    }
}

fn synchronizer() -> ArtifactSynchronizer<Arc<CdnStub>> {
    let registry = ArtifactRegistry::builder("1.6.2")
        .register_default("1.20.1", "KHhjRppT")
        .register_default("1.20.4", "kJmEO0xO")
        .build();
    ArtifactSynchronizer::new(
        Arc::new(registry),
        ArtifactLayout::from_config(&SyncConfig::default()),
        Arc::new(CdnStub::default()),
    )
}

fn entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    entries.sort();
    entries
}

#[tokio::test]
async fn empty_directory_scenario() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("skinlayers3d");
    std::fs::create_dir(&dir).unwrap();

    let cdn = Arc::new(CdnStub::default());
    let registry = ArtifactRegistry::builder("1.6.2")
        .register("1.20.1", "KHhjRppT", "1.6.2")
        .build();
    let sync = ArtifactSynchronizer::new(
        Arc::new(registry),
        ArtifactLayout::from_config(&SyncConfig::default()),
        cdn.clone(),
    );

    let path = sync.ensure_synced("1.20.1", &dir).await.unwrap();

    let requests = cdn.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("KHhjRppT"));
    assert!(requests[0].contains("1.6.2-mc1.20.1"));
    assert!(path
        .to_string_lossy()
        .ends_with("-fabric-1.6.2-mc1.20.1.jar"));
    assert!(dir.join(SENTINEL).exists());
}

#[tokio::test]
async fn valid_file_scenario_performs_no_download() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_path_buf();
    let existing = dir.join("skinlayers3d-fabric-1.6.2-mc1.20.1.jar");
    write_mod_jar(&existing, "skinlayers3d", "1.20.1-1.6.2");
    let sync = synchronizer();

    let report = sync.ensure_synced_detailed("1.20.1", &dir).await.unwrap();

    assert_eq!(report.action, SyncAction::AlreadyCurrent);
    assert_eq!(report.path, existing);
}

#[tokio::test]
async fn sync_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("mods").join("skinlayers3d");
    let cdn = Arc::new(CdnStub::default());
    let sync = ArtifactSynchronizer::new(
        Arc::new(
            ArtifactRegistry::builder("1.6.2")
                .register_default("1.20.1", "KHhjRppT")
                .build(),
        ),
        ArtifactLayout::from_config(&SyncConfig::default()),
        cdn.clone(),
    );

    let first = sync.ensure_synced("1.20.1", &dir).await.unwrap();
    let second = sync.ensure_synced("1.20.1", &dir).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(cdn.requests().len(), 1);
    assert_eq!(entries(&dir), vec![first, dir.join(SENTINEL)]);
}

#[tokio::test]
async fn switching_game_version_replaces_the_artifact() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("skinlayers3d");
    let sync = synchronizer();

    let old = sync.ensure_synced("1.20.1", &dir).await.unwrap();
    let new = sync.ensure_synced("1.20.4", &dir).await.unwrap();

    assert!(!old.exists());
    assert!(new.ends_with("skinlayers3d-fabric-1.6.2-mc1.20.4.jar"));
    assert_eq!(entries(&dir), vec![new, dir.join(SENTINEL)]);
}

#[tokio::test]
async fn multiple_archives_leave_exactly_one() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_path_buf();
    write_mod_jar(&dir.join("one.jar"), "skinlayers3d", "1.20.1-1.6.2");
    write_mod_jar(&dir.join("two.jar"), "skinlayers3d", "1.20.1-1.6.2");
    write_mod_jar(&dir.join("three.jar"), "iris", "1.6.4");

    let path = synchronizer().ensure_synced("1.20.1", &dir).await.unwrap();

    assert_eq!(entries(&dir), vec![path, dir.join(SENTINEL)]);
}

#[tokio::test]
async fn unknown_version_is_rejected_without_side_effects() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("does").join("not").join("exist");

    let err = synchronizer()
        .ensure_synced("1.16.5", &dir)
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        SyncError::UnregisteredArtifact { game_version } if game_version == "1.16.5"
    ));
    assert!(err.is_configuration_error());
    assert!(!tmp.path().join("does").exists());
}
