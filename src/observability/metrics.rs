//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): page shells served, by section
//!   and status
//! - `gateway_render_duration_seconds` (histogram): page render latency
//!
//! # Design Decisions
//! - Section label uses the legacy lowercase names so dashboards match
//!   the public URLs
//! - Exporter failure is logged and non-fatal; the gateway serves pages
//!   with or without a scrape endpoint

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::sections::SectionId;

/// Install the Prometheus exporter and register metric descriptions.
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, address = %addr, "Failed to install metrics exporter");
        return;
    }

    describe_counter!(
        "gateway_requests_total",
        "Page requests served, labeled by resolved section and status"
    );
    describe_histogram!(
        "gateway_render_duration_seconds",
        "Time spent rendering page shells"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
}

/// Record one served request.
pub fn record_request(section: SectionId, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "section" => section.as_str(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("gateway_render_duration_seconds", "section" => section.as_str())
        .record(start.elapsed().as_secs_f64());
}
