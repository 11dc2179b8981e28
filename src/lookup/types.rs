//! Lookup request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{Address, AddressError, FormatErrorKind};
use crate::routing::{Decision, Explanation, Prefix, RankedRoute};

/// Request payload for a route lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Destination address as entered by the caller (validated on lookup).
    pub destination: String,
}

impl LookupRequest {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

/// A matched route as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteView {
    pub network: Prefix,
    pub next_hop: Address,
    pub ad: u32,
    pub metric: u32,
    pub is_best: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only set on the best route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
}

/// Successful lookup. An empty `routes` list means no route matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Destination in canonical dotted-quad form.
    pub destination: Address,
    /// Matching routes, best first.
    pub routes: Vec<RouteView>,
}

impl LookupResponse {
    pub fn best(&self) -> Option<&RouteView> {
        self.routes.iter().find(|r| r.is_best)
    }
}

impl From<Decision<'_>> for LookupResponse {
    fn from(decision: Decision<'_>) -> Self {
        let mut explanation = decision.explanation;
        let routes = decision
            .matches
            .iter()
            .map(|RankedRoute { entry, is_best }| RouteView {
                network: entry.prefix,
                next_hop: entry.next_hop,
                ad: entry.ad,
                metric: entry.metric,
                is_best: *is_best,
                name: entry.name.clone(),
                explanation: if *is_best { explanation.take() } else { None },
            })
            .collect();

        Self {
            destination: decision.destination,
            routes,
        }
    }
}

/// Failed lookup: the destination text was not a valid IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct LookupFailure {
    /// Human-readable description.
    pub error: String,
    /// Which validation rule the input broke.
    pub kind: FormatErrorKind,
}

impl From<AddressError> for LookupFailure {
    fn from(err: AddressError) -> Self {
        Self {
            kind: err.kind(),
            error: err.to_string(),
        }
    }
}
