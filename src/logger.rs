//! Logger setup. Messages go to stderr so they never mix with renderer output.

/// Initializes `env_logger`: `Debug` when verbose, `Info` otherwise.
pub fn init_logger(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(verbose)
        .init();
}
