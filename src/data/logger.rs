use env_logger::{Builder, Env};

/// Installs the global logger. `RUST_LOG` overrides the default `info`
/// filter; `quiet` lowers it to warnings.
pub fn init(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };

    // A second init (tests, embedding hosts) keeps the first logger.
    if let Err(e) = Builder::from_env(Env::default().default_filter_or(default))
        .format_target(false)
        .try_init()
    {
        log::debug!("logger already installed: {e}");
    }
}
