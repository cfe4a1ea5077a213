//! Logging setup for the command line

use tracing_subscriber::EnvFilter;

/// Default filter without `-v`
const DEFAULT_LEVEL: &str = "warn";

/// Filter with `-v`
const VERBOSE_LEVEL: &str = "debug";

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set. Calling this twice keeps the first subscriber.
pub fn init(verbose: bool) {
    let level = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
