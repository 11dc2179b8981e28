//! Shared routing table snapshots.
//!
//! # Responsibilities
//! - Hold the current routing table
//! - Hand out immutable snapshots to lookups
//! - Swap in reloaded tables atomically
//!
//! # Design Decisions
//! - Readers take an `Arc` snapshot and keep it for the whole lookup, so a
//!   concurrent reload never shows them a partially-updated table
//! - Writers replace the whole table; entries are never edited in place

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::mpsc;

use crate::observability::metrics;
use crate::routing::RoutingTable;

/// Owner of the live routing table.
#[derive(Debug)]
pub struct TableProvider {
    current: ArcSwap<RoutingTable>,
}

impl TableProvider {
    pub fn new(table: RoutingTable) -> Self {
        metrics::record_table_size(table.len());
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// The table as of now. Later reloads do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<RoutingTable> {
        self.current.load_full()
    }

    /// Replace the live table.
    pub fn replace(&self, table: RoutingTable) {
        let routes = table.len();
        self.current.store(Arc::new(table));
        metrics::record_table_size(routes);
        tracing::info!(routes, "Routing table swapped");
    }

    /// Apply tables from `updates` until the sender side is dropped.
    pub async fn apply_updates(self: Arc<Self>, mut updates: mpsc::UnboundedReceiver<RoutingTable>) {
        while let Some(table) = updates.recv().await {
            self.replace(table);
        }
        tracing::debug!("Table update channel closed");
    }
}

impl Default for TableProvider {
    fn default() -> Self {
        Self::new(RoutingTable::default())
    }
}
