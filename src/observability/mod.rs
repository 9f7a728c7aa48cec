//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, render latency)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level so operators can turn up
//!   verbosity without touching config
//! - Metrics are labeled by resolved section, which is the dimension this
//!   service exists to know about
//! - Metrics endpoint is opt-in; a marketing edge node often runs without
//!   a scraper

pub mod logging;
pub mod metrics;
