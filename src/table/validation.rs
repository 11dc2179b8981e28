//! Routing table validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Parse every network and next hop
//! - Validate value ranges (prefix length ≤ 32, poll interval > 0)
//! - Compile validated routes into a RoutingTable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Networks with host bits set are accepted with a warning (matching masks them)
//! - Runs before a table is accepted into the system

use std::fmt;

use crate::address::Address;
use crate::routing::{Prefix, RouteEntry, RoutingTable};
use crate::table::schema::TableConfig;

/// A single semantic problem in a table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `routes[2].next_hop`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl fmt::Display) -> Self {
        Self {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate `config` and build the routing table it describes.
pub fn validate_config(config: &TableConfig) -> Result<RoutingTable, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut entries = Vec::with_capacity(config.routes.len());

    if config.reload.enabled && config.reload.poll_interval_secs == 0 {
        errors.push(ValidationError::new(
            "reload.poll_interval_secs",
            "must be greater than 0 when reload is enabled",
        ));
    }

    for (i, route) in config.routes.iter().enumerate() {
        let prefix = match route.network.parse::<Prefix>() {
            Ok(prefix) => Some(prefix),
            Err(e) => {
                errors.push(ValidationError::new(format!("routes[{}].network", i), e));
                None
            }
        };

        let next_hop = match Address::parse(&route.next_hop) {
            Ok(addr) => Some(addr),
            Err(e) => {
                errors.push(ValidationError::new(format!("routes[{}].next_hop", i), e));
                None
            }
        };

        if let (Some(prefix), Some(next_hop)) = (prefix, next_hop) {
            if !prefix.is_canonical() {
                tracing::warn!(
                    route = i,
                    network = %prefix,
                    canonical = %prefix.canonical(),
                    "Route network has host bits set; they are ignored when matching"
                );
            }
            tracing::debug!(
                route = i,
                name = route.name.as_deref().unwrap_or("-"),
                network = %prefix,
                next_hop = %next_hop,
                "Route compiled"
            );
            entries.push(
                RouteEntry::new(prefix, next_hop, route.ad, route.metric)
                    .with_name(route.name.clone()),
            );
        }
    }

    if errors.is_empty() {
        Ok(RoutingTable::new(entries))
    } else {
        Err(errors)
    }
}
