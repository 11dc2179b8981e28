//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → stderr (log lines)
//!     → Prometheus text snapshot (on demand)
//! ```
//!
//! # Design Decisions
//! - Structured logging with typed fields (destination, routes, path)
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
