// ─── skinlayers-sync Core ───
// Keeps a single verified copy of the 3D Skin Layers mod in a managed
// directory and hands its path to the host mod loader.
//
// Architecture:
//   core/
//     artifact/   — Artifact records, frozen registry, file/URL naming
//     archive/    — Zip entry reader + fabric.mod.json verification
//     downloader/ — Fetch capability + reqwest-backed implementation
//     sync/       — Directory reconciliation and per-directory locks
//     discovery   — Mod loader discovery hand-off
//     state/      — Startup wiring of config, registry and synchronizer

pub mod archive;
pub mod artifact;
pub mod config;
pub mod discovery;
pub mod downloader;
pub mod error;
pub mod http;
pub mod logging;
pub mod state;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;
