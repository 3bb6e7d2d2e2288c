use std::path::Path;
use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, metrics::SdkMeterProvider, trace::SdkTracerProvider};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_opentelemetry::{MetricsLayer, OpenTelemetryLayer};
use tracing_subscriber::Layer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const SERVICE_NAME: &str = "deskbot";

fn get_resource() -> Resource {
    static RESOURCE: OnceLock<Resource> = OnceLock::new();
    RESOURCE
        .get_or_init(|| Resource::builder().with_service_name(SERVICE_NAME).build())
        .clone()
}

fn init_traces(endpoint: &str) -> anyhow::Result<SdkTracerProvider> {
    let exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(format!("{}/v1/traces", endpoint.trim_end_matches('/')))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(get_resource())
        .build())
}

fn init_metrics(endpoint: &str) -> anyhow::Result<SdkMeterProvider> {
    let exporter = MetricExporter::builder()
        .with_http()
        .with_endpoint(format!("{}/v1/metrics", endpoint.trim_end_matches('/')))
        .build()?;

    Ok(SdkMeterProvider::builder()
        .with_periodic_exporter(exporter)
        .with_resource(get_resource())
        .build())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

// OTLP export goes over reqwest/hyper; keep their own events out of the
// export pipeline so exporting does not generate more telemetry.
fn otel_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::new("info")
        .add_directive("hyper=off".parse()?)
        .add_directive("reqwest=off".parse()?)
        .add_directive("opentelemetry=off".parse()?))
}

/// Install the global subscriber.
///
/// Always logs to stderr. `log_dir` adds a daily-rolling log file and
/// `otlp_endpoint` adds OTLP trace and metric export. Hold the returned guard
/// until exit so buffered telemetry is flushed.
pub fn init_tracing_subscriber(
    log_dir: Option<&Path>,
    otlp_endpoint: Option<&str>,
) -> anyhow::Result<OtelGuard> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter());

    let mut file_guard = None;
    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "deskbot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            file_guard = Some(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(env_filter()),
            )
        }
        None => None,
    };

    let (tracer_provider, meter_provider) = match otlp_endpoint {
        Some(endpoint) => (Some(init_traces(endpoint)?), Some(init_metrics(endpoint)?)),
        None => (None, None),
    };

    let trace_layer = match &tracer_provider {
        Some(provider) => Some(
            OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)).with_filter(otel_filter()?),
        ),
        None => None,
    };
    let metrics_layer = match &meter_provider {
        Some(provider) => Some(MetricsLayer::new(provider.clone()).with_filter(otel_filter()?)),
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(trace_layer)
        .with(metrics_layer)
        .try_init()?;

    Ok(OtelGuard {
        tracer_provider,
        meter_provider,
        _file_guard: file_guard,
    })
}

pub struct OtelGuard {
    tracer_provider: Option<SdkTracerProvider>,
    meter_provider: Option<SdkMeterProvider>,
    _file_guard: Option<WorkerGuard>,
}

impl Drop for OtelGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take() {
            if let Err(err) = provider.shutdown() {
                eprintln!("{err:?}");
            }
        }
        if let Some(provider) = self.meter_provider.take() {
            if let Err(err) = provider.shutdown() {
                eprintln!("{err:?}");
            }
        }
    }
}
