//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`. The output format is
/// picked from `logging.format` (`json`, `pretty` or `compact`). Logs go to
/// stderr so `mdforge generate` can print Markdown on stdout.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format.as_str() {
        "json" => builder.json().with_current_span(false).try_init()?,
        "pretty" => builder.pretty().try_init()?,
        _ => builder.compact().try_init()?,
    }

    Ok(())
}
