use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::LogFormat;

const DEFAULT_LOG_FILTER: &str = "draw_grid=info,dense_grid=info,warn";

/// Set up logs
pub fn setup_logs(format: &LogFormat) {
    // Get the current log level from the environment variable `RUST_LOG`
    let log_level = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(log_level);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_target(false),
            )
            .init(),
    }
}
