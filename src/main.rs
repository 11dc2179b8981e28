//! Static route decision engine (CLI).
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                  ROUTE LOOKUP                    │
//!                      │                                                  │
//!   destination text   │  ┌─────────┐    ┌─────────┐    ┌──────────────┐  │
//!   ───────────────────┼─▶│ address │───▶│ matcher │───▶│   selector   │  │
//!                      │  │  codec  │    │ (CIDR)  │    │ LPM→AD→metric│  │
//!                      │  └─────────┘    └─────────┘    └──────┬───────┘  │
//!                      │                                       ▼          │
//!   ranked routes      │  ┌─────────┐                   ┌──────────────┐  │
//!   ◀──────────────────┼──│ lookup  │◀──────────────────│   explain    │  │
//!                      │  │boundary │                   └──────────────┘  │
//!                      │  └────▲────┘                                     │
//!                      │       │ Arc<RoutingTable> snapshot               │
//!                      │  ┌────┴────────────────────────────────────────┐ │
//!                      │  │ table: loader → validation → provider       │ │
//!                      │  │        watcher (hot reload, atomic swap)    │ │
//!                      │  └─────────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::io::{AsyncBufReadExt, BufReader};

use route_lookup::lookup::{LookupRequest, LookupService};
use route_lookup::observability::{logging, metrics};
use route_lookup::table::{load_table, LoadedTable, TableError, TableProvider, TableWatcher};

#[derive(Parser)]
#[command(name = "route-lookup")]
#[command(about = "Pick the authoritative static route for a destination (LPM, then AD, then metric)", long_about = None)]
struct Cli {
    /// Routing table file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    table: PathBuf,

    /// Log level, overriding the table file's observability.log_level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the route for one destination and print the decision as JSON
    Lookup {
        /// Destination IPv4 address (dotted quad)
        destination: String,
    },
    /// Print the routing table
    Table,
    /// Validate the routing table file
    Check,
    /// Answer destinations read from stdin, one per line, reloading the table on change
    Serve,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = match load_table(&cli.table) {
        Ok(loaded) => loaded,
        Err(TableError::Validation(errors)) => {
            eprintln!("{}: {} invalid field(s)", cli.table.display(), errors.len());
            for error in &errors {
                eprintln!("  {}", error);
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&loaded.config.observability.log_level);
    logging::init_logging(level);

    let metrics_handle = if loaded.config.observability.metrics_enabled {
        metrics::init_metrics()
    } else {
        None
    };

    tracing::info!(
        path = ?cli.table,
        routes = loaded.table.len(),
        reload = loaded.config.reload.enabled,
        "Routing table loaded"
    );

    match cli.command {
        Commands::Lookup { destination } => lookup(loaded, &destination),
        Commands::Table => {
            print_table(&loaded);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            println!("{}: {} routes OK", cli.table.display(), loaded.table.len());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Serve => {
            serve(&cli.table, loaded, metrics_handle).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn lookup(loaded: LoadedTable, destination: &str) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let service = LookupService::new(Arc::new(TableProvider::new(loaded.table)));

    match service.lookup(&LookupRequest::new(destination)) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            println!("{}", serde_json::to_string_pretty(&failure)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_table(loaded: &LoadedTable) {
    println!(
        "{:<20} {:<16} {:>5} {:>8}  {}",
        "NETWORK", "NEXT HOP", "AD", "METRIC", "NAME"
    );
    for entry in &loaded.table {
        println!(
            "{:<20} {:<16} {:>5} {:>8}  {}",
            entry.prefix.to_string(),
            entry.next_hop.to_string(),
            entry.ad,
            entry.metric,
            entry.name.as_deref().unwrap_or("-")
        );
    }
}

async fn serve(
    path: &Path,
    loaded: LoadedTable,
    metrics_handle: Option<PrometheusHandle>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = Arc::new(TableProvider::new(loaded.table));
    let service = LookupService::new(provider.clone());

    // Dropping the watcher stops file notifications, so keep it for the whole loop.
    let _watcher = if loaded.config.reload.enabled {
        let poll_interval = Duration::from_secs(loaded.config.reload.poll_interval_secs);
        let (watcher, updates) = TableWatcher::new(path, poll_interval);
        tokio::spawn(provider.clone().apply_updates(updates));
        Some(watcher.run()?)
    } else {
        None
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.is_empty() {
                    continue;
                }
                let output = match service.lookup(&LookupRequest::new(line)) {
                    Ok(response) => serde_json::to_string(&response)?,
                    Err(failure) => serde_json::to_string(&failure)?,
                };
                println!("{}", output);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, shutting down");
                break;
            }
        }
    }

    if let Some(handle) = metrics_handle {
        eprintln!("{}", handle.render());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
