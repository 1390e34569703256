//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a console subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the filter is `info,newsroom=debug`
/// with `verbose`, and `warn,newsroom=info` without. Logs go to stderr so
/// JSON command output on stdout stays parseable. With `json`, each event is
/// one JSON object per line.
pub fn init_console_telemetry(verbose: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_filter = if verbose {
        "info,newsroom=debug"
    } else {
        "warn,newsroom=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}
