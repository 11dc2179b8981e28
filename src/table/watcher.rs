//! Routing table file watcher for hot reload.
//!
//! # Responsibilities
//! - Watch the table file for writes and creation
//! - Load and validate the file again on each such event
//! - Publish tables that validate; keep the current one otherwise
//!
//! # Design Decisions
//! - The notify callback only forwards events to a `Reloader`, so reload
//!   behaviour can be exercised without a live file watcher
//! - A closed update channel is not an error: it means the provider has shut
//!   down, and the reload is dropped with a debug event

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::observability::metrics;
use crate::routing::RoutingTable;
use crate::table::loader::load_table;

/// Watches the routing table file and publishes validated tables.
pub struct TableWatcher {
    reloader: Reloader,
    poll_interval: Duration,
}

impl TableWatcher {
    /// Returns the watcher and the receiving end for reloaded tables.
    pub fn new(path: &Path, poll_interval: Duration) -> (Self, mpsc::UnboundedReceiver<RoutingTable>) {
        let (updates, update_rx) = mpsc::unbounded_channel();
        let reloader = Reloader {
            path: path.to_path_buf(),
            updates,
        };

        (
            Self {
                reloader,
                poll_interval,
            },
            update_rx,
        )
    }

    /// Start watching on notify's background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.reloader.path.clone();
        let reloader = self.reloader;
        let config = Config::default().with_poll_interval(self.poll_interval);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| reloader.on_event(res),
            config,
        )?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, poll_interval = ?self.poll_interval, "Routing table watcher started");
        Ok(watcher)
    }
}

/// Events that can change the file contents.
fn should_reload(kind: &EventKind) -> bool {
    kind.is_modify() || kind.is_create()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReloadOutcome {
    Published,
    Invalid,
    ReceiverClosed,
}

struct Reloader {
    path: PathBuf,
    updates: mpsc::UnboundedSender<RoutingTable>,
}

impl Reloader {
    fn on_event(&self, res: notify::Result<Event>) {
        match res {
            Ok(event) if should_reload(&event.kind) => {
                self.reload();
            }
            Ok(event) => {
                tracing::trace!(path = ?self.path, kind = ?event.kind, "Ignoring table file event");
            }
            Err(e) => tracing::error!(path = ?self.path, error = %e, "Table watch error"),
        }
    }

    fn reload(&self) -> ReloadOutcome {
        tracing::info!(path = ?self.path, "Routing table changed, reloading");

        let loaded = match load_table(&self.path) {
            Ok(loaded) => loaded,
            Err(e) => {
                metrics::record_reload("failure");
                tracing::error!(path = ?self.path, error = %e, "Reload rejected, keeping current table");
                return ReloadOutcome::Invalid;
            }
        };

        metrics::record_reload("success");
        let routes = loaded.table.len();
        match self.updates.send(loaded.table) {
            Ok(()) => {
                tracing::debug!(path = ?self.path, routes, "Reloaded table published");
                ReloadOutcome::Published
            }
            Err(_) => {
                tracing::debug!(path = ?self.path, routes, "Table receiver gone, dropping reload");
                ReloadOutcome::ReceiverClosed
            }
        }
    }
}
