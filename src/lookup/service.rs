//! Runs lookups against the live routing table.

use std::sync::Arc;

use crate::address::Address;
use crate::lookup::types::{LookupFailure, LookupRequest, LookupResponse};
use crate::observability::metrics;
use crate::routing::select;
use crate::table::TableProvider;

/// Entry point for route lookups.
#[derive(Debug, Clone)]
pub struct LookupService {
    provider: Arc<TableProvider>,
}

impl LookupService {
    pub fn new(provider: Arc<TableProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<TableProvider> {
        &self.provider
    }

    /// Validate the destination, select against the current snapshot and
    /// report ranked matches. Invalid input fails before any table access.
    pub fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, LookupFailure> {
        let destination = match Address::parse(&request.destination) {
            Ok(addr) => addr,
            Err(e) => {
                metrics::record_lookup("invalid");
                tracing::debug!(input = ?request.destination, kind = ?e.kind(), "Rejected destination");
                return Err(e.into());
            }
        };

        let table = self.provider.snapshot();
        let response = LookupResponse::from(select(&table, destination));

        match response.best() {
            Some(best) => {
                metrics::record_lookup("routed");
                tracing::info!(
                    destination = %destination,
                    matched = response.routes.len(),
                    network = %best.network,
                    next_hop = %best.next_hop,
                    name = best.name.as_deref().unwrap_or("-"),
                    "Route selected"
                );
            }
            None => {
                metrics::record_lookup("no_route");
                tracing::info!(destination = %destination, "No matching route");
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::FormatErrorKind;
    use crate::routing::{RouteEntry, RoutingTable};

    fn service(routes: &[(&str, u32, u32)]) -> LookupService {
        let table: RoutingTable = routes
            .iter()
            .map(|(n, ad, metric)| {
                RouteEntry::new(n.parse().unwrap(), "10.0.0.1".parse().unwrap(), *ad, *metric)
            })
            .collect();
        LookupService::new(Arc::new(TableProvider::new(table)))
    }

    #[test]
    fn test_lookup_flags_single_best() {
        let svc = service(&[("10.0.0.0/8", 1, 0), ("10.1.0.0/16", 1, 0), ("0.0.0.0/0", 1, 0)]);
        let response = svc.lookup(&LookupRequest::new("10.1.2.3")).unwrap();

        assert_eq!(response.routes.len(), 3);
        assert_eq!(response.routes.iter().filter(|r| r.is_best).count(), 1);
        let best = response.best().unwrap();
        assert_eq!(best.network.to_string(), "10.1.0.0/16");
        assert!(best.explanation.is_some());
        assert!(response.routes[1..].iter().all(|r| r.explanation.is_none()));
    }

    #[test]
    fn test_lookup_reports_route_name() {
        let table = RoutingTable::new(vec![
            RouteEntry::new("0.0.0.0/0".parse().unwrap(), "10.0.0.254".parse().unwrap(), 1, 0)
                .with_name(Some("isp-a".into())),
            RouteEntry::new("10.0.0.0/8".parse().unwrap(), "10.0.0.1".parse().unwrap(), 1, 0),
        ]);
        let svc = LookupService::new(Arc::new(TableProvider::new(table)));

        let response = svc.lookup(&LookupRequest::new("10.1.1.1")).unwrap();
        assert_eq!(response.routes[0].name, None);
        assert_eq!(response.routes[1].name.as_deref(), Some("isp-a"));

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["routes"][0].get("name").is_none());
        assert_eq!(json["routes"][1]["name"], "isp-a");
    }

    #[test]
    fn test_lookup_invalid_destination() {
        let svc = service(&[("0.0.0.0/0", 1, 0)]);
        let failure = svc.lookup(&LookupRequest::new("1.2.3")).unwrap_err();
        assert_eq!(failure.kind, FormatErrorKind::GroupCount);
        assert!(failure.error.contains("\"1.2.3\""));
    }

    #[test]
    fn test_lookup_no_route_is_success() {
        let svc = service(&[("10.0.0.0/8", 1, 0)]);
        let response = svc.lookup(&LookupRequest::new("8.8.8.8")).unwrap();
        assert!(response.routes.is_empty());
        assert!(response.best().is_none());
    }

    #[test]
    fn test_lookup_sees_replaced_table() {
        let svc = service(&[("10.0.0.0/8", 1, 0)]);
        assert!(svc.lookup(&LookupRequest::new("8.8.8.8")).unwrap().routes.is_empty());

        svc.provider().replace(RoutingTable::new(vec![RouteEntry::new(
            "0.0.0.0/0".parse().unwrap(),
            "10.0.0.254".parse().unwrap(),
            1,
            0,
        )]));

        let response = svc.lookup(&LookupRequest::new("8.8.8.8")).unwrap();
        assert_eq!(response.best().unwrap().next_hop.to_string(), "10.0.0.254");
    }
}
