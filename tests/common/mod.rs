//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use route_lookup::lookup::LookupService;
use route_lookup::routing::{RouteEntry, RoutingTable};
use route_lookup::table::TableProvider;

/// Build a route from text fields.
pub fn route(network: &str, next_hop: &str, ad: u32, metric: u32) -> RouteEntry {
    RouteEntry::new(
        network.parse().expect("valid prefix"),
        next_hop.parse().expect("valid next hop"),
        ad,
        metric,
    )
}

/// Table with overlapping 192.168.x routes and a default route.
pub fn overlapping_table() -> RoutingTable {
    RoutingTable::new(vec![
        route("192.168.1.0/24", "10.0.0.1", 1, 10),
        route("192.168.0.0/16", "10.0.0.2", 1, 10),
        route("192.168.1.70/32", "10.0.0.3", 1, 10),
        route("0.0.0.0/0", "10.0.0.254", 1, 0),
    ])
}

/// Two routes for the same /16 from different sources.
pub fn competing_sources_table() -> RoutingTable {
    RoutingTable::new(vec![
        route("172.16.0.0/16", "10.1.0.1", 110, 20),
        route("172.16.0.0/16", "10.1.0.2", 1, 10),
    ])
}

/// Private ranges only, no default route.
pub fn private_only_table() -> RoutingTable {
    RoutingTable::new(vec![
        route("10.0.0.0/8", "10.255.0.1", 1, 0),
        route("172.16.0.0/12", "10.255.0.2", 1, 0),
        route("192.168.0.0/16", "10.255.0.3", 1, 0),
    ])
}

pub fn service(table: RoutingTable) -> LookupService {
    LookupService::new(Arc::new(TableProvider::new(table)))
}

/// Table file text with reload enabled and a fast poll interval.
pub fn table_file(routes: &[(&str, &str, u32, u32)]) -> String {
    let mut out = String::from("[reload]\nenabled = true\npoll_interval_secs = 1\n");
    for (network, next_hop, ad, metric) in routes {
        out.push_str(&format!(
            "\n[[routes]]\nnetwork = \"{}\"\nnext_hop = \"{}\"\nad = {}\nmetric = {}\n",
            network, next_hop, ad, metric
        ));
    }
    out
}
