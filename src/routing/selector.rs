//! Route selection.
//!
//! # Responsibilities
//! - Collect every table entry whose prefix contains the destination
//! - Rank matches: longest prefix, then lowest AD, then lowest metric
//! - Flag the first ranked entry as best and explain why it won
//!
//! # Design Decisions
//! - Pure function of (table snapshot, destination); no internal state
//! - One composite sort key compared lexicographically
//! - Stable sort: remaining ties keep table order
//! - Best flag lives in the Decision, never on the shared RouteEntry
//! - No match is a normal outcome (empty Decision), not an error

use std::cmp::Reverse;

use crate::address::Address;
use crate::routing::explain::{explain, Explanation};
use crate::routing::table::{RouteEntry, RoutingTable};

/// Sort key for ranking: longer prefix first, then lower AD, then lower metric.
pub type RankKey = (Reverse<u8>, u32, u32);

pub fn rank_key(entry: &RouteEntry) -> RankKey {
    (Reverse(entry.prefix.length()), entry.ad, entry.metric)
}

/// A matched route annotated for one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRoute<'a> {
    pub entry: &'a RouteEntry,
    pub is_best: bool,
}

/// Outcome of a single lookup against a table snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<'a> {
    pub destination: Address,
    /// Matching routes in rank order. The first one, if any, is flagged best.
    pub matches: Vec<RankedRoute<'a>>,
    /// Present exactly when there is a winner.
    pub explanation: Option<Explanation>,
}

impl<'a> Decision<'a> {
    pub fn winner(&self) -> Option<&'a RouteEntry> {
        self.matches
            .iter()
            .find(|route| route.is_best)
            .map(|route| route.entry)
    }

    pub fn is_no_route(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Entries of `table` that contain `destination`, in table order.
pub fn match_set(table: &RoutingTable, destination: Address) -> Vec<&RouteEntry> {
    table
        .iter()
        .filter(|entry| entry.matches(destination))
        .collect()
}

/// Select the best route for `destination`.
pub fn select(table: &RoutingTable, destination: Address) -> Decision<'_> {
    let mut matches = match_set(table, destination);

    // `sort_by_key` is stable, which keeps table order for full ties.
    matches.sort_by_key(|entry| rank_key(entry));

    let explanation = matches
        .split_first()
        .map(|(best, others)| explain(best, others));

    let matches: Vec<RankedRoute<'_>> = matches
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedRoute {
            entry,
            is_best: i == 0,
        })
        .collect();

    tracing::debug!(
        destination = %destination,
        table_size = table.len(),
        matched = matches.len(),
        best = ?matches.first().map(|route| route.entry.prefix.to_string()),
        "Route selection complete"
    );

    Decision {
        destination,
        matches,
        explanation,
    }
}
