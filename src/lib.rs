//! Static route decision engine.
//!
//! Given a destination IPv4 address and a static routing table, finds every
//! matching route and picks the authoritative one the way a router does:
//! longest prefix match, then lowest administrative distance, then lowest
//! metric.

pub mod address;
pub mod lookup;
pub mod observability;
pub mod routing;
pub mod table;

pub use address::{Address, AddressError};
pub use lookup::{LookupFailure, LookupRequest, LookupResponse, LookupService};
pub use routing::{select, Decision, Explanation, Prefix, RouteEntry, RoutingTable};
pub use table::TableProvider;
