//! Routing decision engine.
//!
//! # Data Flow
//! ```text
//! Lookup (destination Address, RoutingTable snapshot)
//!     → matcher.rs (prefix containment, per entry)
//!     → selector.rs (MatchSet → rank by prefix length, AD, metric)
//!     → explain.rs (justify the winner against the other matches)
//!     → Return: Decision (ranked matches, best flag, explanation)
//!
//! Table Construction (at load/reload):
//!     route entries
//!     → Parse prefixes (prefix.rs)
//!     → Freeze as immutable RoutingTable (table.rs)
//! ```
//!
//! # Design Decisions
//! - Tables are immutable once built (thread-safe without locks)
//! - Deterministic: same table and destination always give the same Decision
//! - Ranking and explanation use the same match set
//! - No route is a normal Decision, not an error

pub mod explain;
pub mod matcher;
pub mod prefix;
pub mod selector;
pub mod table;

pub use explain::Explanation;
pub use matcher::{contains, Matcher};
pub use prefix::{Prefix, PrefixError};
pub use selector::{select, Decision, RankedRoute};
pub use table::{RouteEntry, RoutingTable};
