use anyhow::Context;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{
    BunyanFormattingLayer,
    JsonStorageLayer,
};
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{
    EnvFilter,
    Registry,
};

/// Install the global `tracing` subscriber.
///
/// Spans and events are written to stdout as bunyan-formatted json lines.
/// `RUST_LOG` takes precedence over `env_filter` when it is set.
/// `log` records emitted by dependencies are forwarded to the subscriber.
///
/// It must be called at most once per process.
pub fn setup_tracing(name: String, env_filter: String) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to redirect `log` records to tracing")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber).context("Failed to set the tracing subscriber")
}
