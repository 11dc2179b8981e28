//! Routing table file schema.
//!
//! This module defines the on-disk structure of a routing table file.
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root of a routing table file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TableConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Hot reload settings.
    pub reload: ReloadConfig,

    /// Static routes, in table order.
    pub routes: Vec<RouteConfig>,
}

/// A static route as written in the table file.
///
/// Addresses are kept as text here; validation parses them so that every
/// bad route in a file is reported at once.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Destination network in CIDR form (e.g., "192.168.1.0/24").
    pub network: String,

    /// Next hop address (e.g., "10.0.0.1").
    pub next_hop: String,

    /// Administrative distance (lower = more trusted).
    pub ad: u32,

    /// Route metric (lower = preferred).
    pub metric: u32,

    /// Optional label shown in logs and table listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record lookup and reload counters.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

/// Hot reload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReloadConfig {
    /// Watch the table file and swap in new tables as it changes.
    pub enabled: bool,

    /// Poll interval for watchers that fall back to polling, in seconds.
    pub poll_interval_secs: u64,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_secs: 2,
        }
    }
}
