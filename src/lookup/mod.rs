//! Lookup request/response boundary.
//!
//! Input is a destination as text; output is either the ranked matches with
//! the best route flagged and explained, or a validation failure naming the
//! kind of malformed input. No route is a successful, empty response.

pub mod service;
pub mod types;

pub use service::LookupService;
pub use types::{LookupFailure, LookupRequest, LookupResponse, RouteView};
