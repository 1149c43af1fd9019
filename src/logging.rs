use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

/// Install a global `tracing` subscriber that prints events at or above `level`
/// ("trace", "debug", "info", "warn", "error" or "off").
///
/// Unknown levels fall back to `warn`. Calling this more than once is harmless;
/// only the first subscriber is kept.
pub fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or(LevelFilter::WARN);
    let _ = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
