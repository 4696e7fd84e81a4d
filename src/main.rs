//! # skinlayers-sync CLI entry point
//!
//! Parses command-line arguments, builds the application state once and
//! dispatches to the subcommand handlers in `commands`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use skinlayers_sync_lib::commands::{run_list, run_sync, ListArgs, SyncArgs};
use skinlayers_sync_lib::core::logging::init_tracing;
use skinlayers_sync_lib::AppState;

/// Keep the 3D Skin Layers Fabric mod installed and current in a managed directory.
#[derive(Parser, Debug)]
#[command(name = "skinlayers-sync", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile a managed directory and print the artifact path.
    Sync(SyncArgs),

    /// List the registered artifacts.
    List(ListArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("skinlayers-sync {} starting", env!("CARGO_PKG_VERSION"));

    let state = match AppState::load(cli.config.as_deref()) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    let result = match &cli.command {
        Commands::Sync(args) => run_sync(args, &state).await,
        Commands::List(args) => run_list(args, &state),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(1)
        }
    }
}
