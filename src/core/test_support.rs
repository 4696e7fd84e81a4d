//! Fixtures shared by the unit tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use zip::write::SimpleFileOptions;

use crate::core::downloader::ArtifactFetcher;
use crate::core::error::{SyncError, SyncResult};

pub fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, bytes) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap();
}

/// Write a jar whose `fabric.mod.json` declares `id` and `version`.
pub fn write_mod_jar(path: &Path, id: &str, version: &str) {
    let manifest = serde_json::json!({
        "schemaVersion": 1,
        "id": id,
        "version": version,
    })
    .to_string();
    write_archive(path, &[("fabric.mod.json", manifest.as_bytes())]);
}

/// In-memory [`ArtifactFetcher`] that records every call.
pub struct FakeFetcher {
    served: Option<(String, String)>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeFetcher {
    /// Writes a jar declaring `id` and `version` at every requested destination.
    pub fn serving(id: &str, version: &str) -> Self {
        Self {
            served: Some((id.to_string(), version.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request with HTTP 503.
    pub fn failing() -> Self {
        Self {
            served: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactFetcher for FakeFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> SyncResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), dest.to_path_buf()));

        match &self.served {
            Some((id, version)) => {
                write_mod_jar(dest, id, version);
                Ok(())
            }
            None => Err(SyncError::HttpStatus {
                url: url.to_string(),
                status: 503,
            }),
        }
    }
}
