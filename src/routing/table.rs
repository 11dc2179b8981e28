//! Route entries and the routing table they live in.

use std::hash::{Hash, Hasher};

use crate::address::Address;
use crate::routing::matcher::Matcher;
use crate::routing::prefix::Prefix;

/// A single static route.
///
/// Entries are compared on their routing fields only; the optional `name` is
/// a display label and never affects equality or hashing. Whether an entry is
/// the best route is a property of one lookup and is never stored here.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub prefix: Prefix,
    pub next_hop: Address,
    /// Administrative distance (lower = more trusted source).
    pub ad: u32,
    /// Route cost (lower = preferred).
    pub metric: u32,
    /// Operator label from the table file.
    pub name: Option<String>,
}

impl RouteEntry {
    pub fn new(prefix: Prefix, next_hop: Address, ad: u32, metric: u32) -> Self {
        Self {
            prefix,
            next_hop,
            ad,
            metric,
            name: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn matches(&self, destination: Address) -> bool {
        self.prefix.matches(destination)
    }

    fn key(&self) -> (Prefix, Address, u32, u32) {
        (self.prefix, self.next_hop, self.ad, self.metric)
    }
}

impl PartialEq for RouteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RouteEntry {}

impl Hash for RouteEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// An ordered, immutable list of routes.
///
/// Table order is significant: it breaks ties that remain after prefix
/// length, AD and metric have been compared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingTable {
    entries: Vec<RouteEntry>,
}

impl RoutingTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }
}

impl FromIterator<RouteEntry> for RoutingTable {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RoutingTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
