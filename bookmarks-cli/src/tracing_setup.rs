//! Tracing setup for the bookmarks server, with optional OTLP export
//!
//! Usage:
//!   bookmarks --debug serve                              # Debug logging to console
//!   bookmarks --otel serve                               # Export traces to OTLP endpoint
//!   RUST_LOG=bookmarks_server=debug,tower_http=debug ... # Request-level logs
//!
//! Environment variables:
//!   RUST_LOG                     # Log filter (default: info)
//!   OTEL_EXPORTER_OTLP_ENDPOINT  # OTLP endpoint (default: http://localhost:4317)
//!   OTEL_SERVICE_NAME            # Service name (default: bookmarks)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Flags from the command line that shape logging
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Fall back to `debug` instead of `info` when RUST_LOG is unset
    pub debug: bool,
    /// Export spans over OTLP
    pub otel: bool,
}

/// RUST_LOG wins; otherwise `debug` or `info` depending on the flag.
fn env_filter(config: &TracingConfig) -> EnvFilter {
    let fallback = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Console-only subscriber. Fails if a global subscriber is already set.
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Console subscriber plus an OTLP span exporter for request traces.
#[cfg(feature = "telemetry")]
pub fn init_tracing_with_otel(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "bookmarks".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter for {endpoint}: {e}"))?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
            "service.name",
            service_name.clone(),
        )]))
        .build();

    let tracer = provider.tracer("bookmarks-server");
    // The global slot keeps the provider alive until `shutdown_otel`.
    let _ = opentelemetry::global::set_tracer_provider(provider);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(config.debug).compact())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(%endpoint, service = %service_name, "exporting bookmark request traces");
    Ok(())
}

/// Flush pending spans before exit.
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

/// Install the global subscriber.
///
/// Without the telemetry feature `--otel` only logs a warning.
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if config.otel {
        return init_tracing_with_otel(config);
    }

    init_tracing(config)?;

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        tracing::warn!("--otel requested but bookmarks was built without the telemetry feature");
    }

    Ok(())
}
