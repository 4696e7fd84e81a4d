use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::core::error::{SyncError, SyncResult};
use crate::core::state::AppState;
use crate::core::sync::SyncAction;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Game version to sync the artifact for (e.g. 1.20.1).
    #[arg(long)]
    pub game_version: String,

    /// Managed directory. Created if missing.
    #[arg(long, conflicts_with = "mods_dir", required_unless_present = "mods_dir")]
    pub dir: Option<PathBuf>,

    /// Host mod directory; the managed subdirectory is created inside it.
    #[arg(long)]
    pub mods_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Also print the download URL of every artifact.
    #[arg(long)]
    pub urls: bool,
}

/// Sync the artifact and print its path. Returns the process exit code.
pub async fn run_sync(args: &SyncArgs, state: &AppState) -> SyncResult<u8> {
    let directory = match (&args.dir, &args.mods_dir) {
        (Some(dir), _) => dir.clone(),
        (None, Some(mods)) => mods.join(&state.config.managed_subdirectory),
        (None, None) => {
            return Err(SyncError::Other(
                "either --dir or --mods-dir is required".to_string(),
            ))
        }
    };

    let report = state
        .synchronizer
        .ensure_synced_detailed(&args.game_version, &directory)
        .await?;

    match &report.action {
        SyncAction::AlreadyCurrent => info!("Artifact already up to date"),
        SyncAction::Downloaded { reason } => info!("Artifact downloaded: {}", reason),
    }
    println!("{}", report.path.display());

    Ok(0)
}

/// Print every registered artifact, one per line.
pub fn run_list(args: &ListArgs, state: &AppState) -> SyncResult<u8> {
    let synchronizer = &state.synchronizer;
    let layout = synchronizer.layout();

    for record in synchronizer.registry().iter() {
        if args.urls {
            println!(
                "{}\t{}\t{}",
                record.game_version,
                record.fingerprint(),
                layout.download_url(record)
            );
        } else {
            println!(
                "{}\t{}\t{}",
                record.game_version,
                record.fingerprint(),
                layout.file_name(record)
            );
        }
    }

    Ok(0)
}
