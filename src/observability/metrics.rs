//! Metrics collection and exposition.
//!
//! # Metrics
//! - `route_lookups_total` (counter): lookups by outcome (`routed`, `no_route`, `invalid`)
//! - `route_table_reloads_total` (counter): reload attempts by result
//! - `route_table_entries` (gauge): routes in the live table
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - The Prometheus recorder is installed without an HTTP listener; the
//!   snapshot is rendered on demand (e.g., when `serve` exits)

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder as the global metrics recorder.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::error!("Failed to install metrics recorder: {}", e);
            None
        }
    }
}

pub fn record_lookup(outcome: &'static str) {
    ::metrics::counter!("route_lookups_total", "outcome" => outcome).increment(1);
}

pub fn record_reload(result: &'static str) {
    ::metrics::counter!("route_table_reloads_total", "result" => result).increment(1);
}

pub fn record_table_size(routes: usize) {
    ::metrics::gauge!("route_table_entries").set(routes as f64);
}
