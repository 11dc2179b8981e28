//! Routing table loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::routing::RoutingTable;
use crate::table::schema::TableConfig;
use crate::table::validation::{validate_config, ValidationError};

/// Error type for table loading.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A parsed table file: its settings plus the compiled routing table.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub config: TableConfig,
    pub table: RoutingTable,
}

/// Parse and validate a routing table from TOML text.
pub fn parse_table(content: &str) -> Result<LoadedTable, TableError> {
    let config: TableConfig = toml::from_str(content)?;
    let table = validate_config(&config).map_err(TableError::Validation)?;

    Ok(LoadedTable { config, table })
}

/// Load and validate a routing table from a TOML file.
pub fn load_table(path: &Path) -> Result<LoadedTable, TableError> {
    let content = fs::read_to_string(path)?;
    let loaded = parse_table(&content)?;

    tracing::debug!(path = ?path, routes = loaded.table.len(), "Routing table loaded");
    Ok(loaded)
}
