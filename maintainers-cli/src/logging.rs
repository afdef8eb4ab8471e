use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable checked first for a log filter, before `RUST_LOG`.
pub const LOG_ENV: &str = "MAINTAINERS_LOG";

/// Install a tracing subscriber writing compact logs to stderr, keeping stdout
/// free for the resolved record. The filter comes from `MAINTAINERS_LOG`, then
/// `RUST_LOG`, and otherwise defaults to `warn` (`debug` when verbose).
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init()
}
