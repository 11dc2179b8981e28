//! Routing table provider subsystem.
//!
//! # Data Flow
//! ```text
//! table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (parse prefixes/next hops, semantic checks)
//!     → RoutingTable (validated, immutable)
//!     → provider.rs (shared as Arc snapshots to lookups)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new table
//!     → validation.rs validates
//!     → atomic swap of Arc<RoutingTable>
//!     → later lookups observe the new table
//! ```
//!
//! # Design Decisions
//! - Tables are immutable once loaded; changes require a full reload
//! - A reload that fails validation keeps the current table
//! - All settings sections have defaults; routes must be fully specified

pub mod loader;
pub mod provider;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_table, parse_table, LoadedTable, TableError};
pub use provider::TableProvider;
pub use schema::{ObservabilityConfig, ReloadConfig, RouteConfig, TableConfig};
pub use watcher::TableWatcher;
