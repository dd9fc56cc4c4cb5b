use crate::config::Config;
use opentelemetry::{global, trace::TraceError, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const CACHE_HITS_TOTAL: &str = "working_days_cache_hits_total";
pub const CACHE_MISSES_TOTAL: &str = "working_days_cache_misses_total";
pub const MONTH_COMPUTATIONS_TOTAL: &str = "working_days_month_computations_total";

const DEFAULT_FILTER: &str = "workdays=debug,tower_http=debug,sqlx=warn";

/// Flushes pending spans on drop when OTLP export is on
pub struct ObservabilityGuard {
    otlp_enabled: bool,
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        if self.otlp_enabled {
            global::shutdown_tracer_provider();
        }
    }
}

pub fn init(config: &Config) -> Result<ObservabilityGuard, Box<dyn std::error::Error>> {
    let otlp_enabled = init_tracing(config)?;
    init_metrics(config.metrics_port)?;

    tracing::info!(
        service = %config.service_name,
        otlp = otlp_enabled,
        "Observability initialized"
    );

    Ok(ObservabilityGuard { otlp_enabled })
}

/// Returns whether spans are also exported over OTLP
fn init_tracing(config: &Config) -> Result<bool, Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);
    let registry = Registry::default().with(env_filter).with(fmt_layer);

    match config.otel_exporter_endpoint.as_deref() {
        Some(endpoint) => {
            let tracer = otlp_tracer(endpoint, &config.service_name)?;
            registry
                .with(tracing_opentelemetry::layer().with_tracer(tracer))
                .try_init()?;
            Ok(true)
        }
        None => {
            registry.try_init()?;
            Ok(false)
        }
    }
}

fn otlp_tracer(endpoint: &str, service_name: &str) -> Result<sdktrace::Tracer, TraceError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
}

fn init_metrics(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()?;

    metrics::describe_counter!(
        CACHE_HITS_TOTAL,
        "Working-days cache lookups served from cache, by entry kind"
    );
    metrics::describe_counter!(
        CACHE_MISSES_TOTAL,
        "Working-days cache lookups that fell through to storage, by entry kind"
    );
    metrics::describe_counter!(
        MONTH_COMPUTATIONS_TOTAL,
        "Month breakdowns computed from settings and holidays"
    );

    tracing::info!("Prometheus exporter listening on port {}", port);
    Ok(())
}
