//! Telemetry bootstrap for the harness (tracing + optional Prometheus).

use anyhow::Result;

pub struct TelemetryGuard;

pub fn init_telemetry(cfg: &data_specs::telemetry::TelemetryCfg) -> Result<TelemetryGuard> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if cfg.json_logs.unwrap_or(false) {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };
    // Tolerate an already-installed subscriber (tests, repeated harness init).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
    // Optional Prometheus metrics exporter
    if let Some(addr) = &cfg.metrics_addr {
        let addr = match addr.parse() {
            Ok(a) => a,
            Err(_e) => {
                metrics::counter!("harness.errors_total", "site" => "telemetry.parse_addr")
                    .increment(1);
                std::net::SocketAddr::from(([127, 0, 0, 1], 9100))
            }
        };
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let _ = builder.with_http_listener(addr).install();
    }
    tracing::info!(
        target: "telemetry",
        log_level = ?cfg.log_level,
        json_logs = ?cfg.json_logs,
        metrics_addr = ?cfg.metrics_addr,
        "telemetry initialized"
    );
    Ok(TelemetryGuard)
}
