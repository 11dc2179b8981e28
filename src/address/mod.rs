//! IPv4 address handling.
//!
//! # Data Flow
//! ```text
//! destination text ("192.168.1.70")
//!     → codec.rs (validate four decimal groups, each 0..=255)
//!     → Address (32-bit value)
//!     → routing subsystem
//!
//! Address
//!     → codec.rs (Display)
//!     → canonical dotted-quad text
//! ```
//!
//! # Design Decisions
//! - Malformed text never produces an Address
//! - Whitespace anywhere is rejected, not trimmed
//! - Groups are one to three digits; leading zeros within that are read as
//!   decimal ("010" = 10). Output is always canonical
//! - Errors carry the kind of malformation so callers can report it verbatim

pub mod codec;

pub use codec::{Address, AddressError, FormatErrorKind};
