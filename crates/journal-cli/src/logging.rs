//! Logger setup for the CLI.
//!
//! Records go to stderr so command output on stdout stays parseable.

/// Install the global logger.
///
/// `info` by default, `debug` with `--verbose`; `RUST_LOG` overrides both.
pub fn init_logging(verbose: bool) {
    env_logger::builder()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init()
}
