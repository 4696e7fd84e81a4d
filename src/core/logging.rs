use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise verbosity picks the filter
/// (0 = info, 1 = debug for this crate, 2+ = trace). Safe to call twice.
pub fn init_tracing(verbosity: u8) {
    let default_directives = match verbosity {
        0 => "info",
        1 => "info,skinlayers_sync_lib=debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives)),
        )
        .with_target(false)
        .try_init();
}
