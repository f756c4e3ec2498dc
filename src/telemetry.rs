use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing with structured logging.
///
/// Logs go to stderr so stdout stays clean for command output (including
/// `--format json`). The filter honors RUST_LOG when set and falls back to
/// the configured log level.
pub fn init_telemetry() -> Result<()> {
    let observability = &crate::config::config()?.observability;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(observability.log_level.clone()));

    let fmt_layer = if observability.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    tracing::debug!("Gaffer telemetry initialized with structured logging");
    Ok(())
}

/// Create a span with common evaluation attributes
pub fn evaluation_span(command: &str, event_id: Option<u64>) -> tracing::Span {
    tracing::info_span!(
        "workflow_evaluation",
        command = command,
        event.id = event_id,
    )
}
