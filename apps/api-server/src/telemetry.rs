//! Log output setup.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,api_server=debug,haven_infra=debug,haven_core=debug";

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// One JSON object per event instead of human-readable lines.
    pub json_logs: bool,
    pub service_name: String,
}

impl TelemetryConfig {
    /// `LOG_FORMAT=json` switches the format; `SERVICE_NAME` tags the startup event.
    pub fn from_env() -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")),
            service_name: std::env::var("SERVICE_NAME").unwrap_or_else(|_| "haven-api".into()),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_telemetry(config: &TelemetryConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let output = if config.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().pretty().boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .init();

    tracing::info!(service = %config.service_name, json = config.json_logs, "Logging ready");
}
