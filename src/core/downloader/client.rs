use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::fetcher::ArtifactFetcher;
use crate::core::error::{SyncError, SyncResult};
use crate::core::http::build_http_client;

/// HTTP downloader backed by `reqwest`.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(user_agent: &str) -> SyncResult<Self> {
        Ok(Self {
            client: build_http_client(user_agent)?,
        })
    }

    /// Download `url` to `dest`.
    ///
    /// The body is streamed into `<dest>.part` and renamed once complete, so
    /// an interrupted transfer never leaves a file under the final name.
    pub async fn download_file(&self, url: &str, dest: &Path) -> SyncResult<()> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SyncError::io(parent, e))?;
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let partial = partial_path(dest);
        let written = match write_stream(response, &partial).await {
            Ok(written) => written,
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                    if cleanup.kind() != std::io::ErrorKind::NotFound {
                        warn!("Could not remove partial download {:?}: {}", partial, cleanup);
                    }
                }
                return Err(e);
            }
        };

        tokio::fs::rename(&partial, dest)
            .await
            .map_err(|e| SyncError::io(dest, e))?;

        debug!("Downloaded: {} -> {:?} ({} bytes)", url, dest, written);
        Ok(())
    }
}

#[async_trait]
impl ArtifactFetcher for Downloader {
    async fn fetch(&self, url: &str, dest: &Path) -> SyncResult<()> {
        self.download_file(url, dest).await
    }
}

async fn write_stream(response: reqwest::Response, path: &Path) -> SyncResult<u64> {
    let mut written = 0u64;
    let mut stream = response.bytes_stream();

    // File handle is dropped before the rename.
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|e| SyncError::io(path, e))?;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|e| SyncError::io(path, e))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| SyncError::io(path, e))?;

    Ok(written)
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name: OsString = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
