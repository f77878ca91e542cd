use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
#[must_use]
pub fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` unless `--quiet`
/// is given. Engine `log` records reach it through the `tracing-log` bridge.
pub fn init(verbosity: u8, quiet: bool) {
    let default = level_for(verbosity, quiet);
    let filter = if quiet {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
