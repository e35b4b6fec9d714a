use anyhow::{anyhow, Result};
use tracing_subscriber::fmt::time::OffsetTime;

/// Installs the global tracing subscriber used by the diagnostic fallbacks
/// (e.g. the NaN warning in `cmp_by_length()`). Fails if a subscriber is
/// already installed, so tests can call it unconditionally and ignore the
/// result.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
