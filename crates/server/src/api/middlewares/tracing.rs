use thiserror::Error;
use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Unable to forward log records to tracing: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Unable to set the tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Routes `log` records and request spans into a JSON (bunyan) subscriber.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn initialize_telemetry() -> Result<(), TelemetryError> {
    LogTracer::init()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("quests-rewards".into(), std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber)?;

    Ok(())
}
