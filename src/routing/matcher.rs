//! Prefix containment.
//!
//! # Responsibilities
//! - Build the network mask for a prefix length
//! - Decide whether an address falls inside a prefix
//!
//! # Design Decisions
//! - Both the network and the address are masked before comparing, so
//!   prefixes with host bits set still match correctly
//! - Lengths 0 and 32 go through the same arithmetic as every other length:
//!   /0 masks to nothing (matches everything), /32 compares every bit

use crate::address::Address;
use crate::routing::prefix::Prefix;

/// Trait for matching destination addresses against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the address satisfies this condition.
    fn matches(&self, addr: Address) -> bool;
}

/// Mask with `length` leading one-bits.
///
/// Callers pass lengths taken from a [`Prefix`], which are always at most 32.
/// The shift is done in 64 bits so that a shift by 32 (length 0) is defined
/// and truncates to an all-zero mask.
pub(crate) const fn mask(length: u8) -> u32 {
    (u64::MAX << (32 - length as u32)) as u32
}

/// Returns true if `addr` lies inside `prefix`.
pub fn contains(prefix: &Prefix, addr: Address) -> bool {
    let mask = mask(prefix.length());
    prefix.network().to_bits() & mask == addr.to_bits() & mask
}

impl Matcher for Prefix {
    fn matches(&self, addr: Address) -> bool {
        contains(self, addr)
    }
}
