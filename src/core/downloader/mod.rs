mod client;
mod fetcher;

pub use client::Downloader;
pub use fetcher::ArtifactFetcher;
