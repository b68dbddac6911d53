//! CLI command implementations
//!
//! - serve: load config, seed the store from the dataset, run the HTTP
//!   server on a tokio runtime
//! - check: one-shot dataset validation, JSON report on stdout

use std::collections::HashSet;
use std::path::Path;

use serde_json::{json, Value};

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::{dataset, Airport, AirportStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Check { config } => check(config.as_deref()),
    }
}

/// Start the HTTP server
///
/// 1. Load configuration (defaults when no file is given)
/// 2. Seed the store from the dataset, embedded or overridden
/// 3. Run the axum server on a tokio runtime until the process exits
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let records = load_records(&config)?;
    tracing::info!(records = records.len(), "dataset loaded");

    let store = AirportStore::new(records);
    let server = HttpServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate the dataset and report on stdout
///
/// Reports the record count, `icao` codes that appear more than once, and
/// records the typed schema cannot account for. Duplicates are reported,
/// not rejected; the store accepts them as-is.
pub fn check(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let records = load_records(&config)?;

    let duplicates = duplicate_icaos(&records);
    let invalid = records
        .iter()
        .filter(|r| serde_json::from_value::<Airport>((*r).clone()).is_err())
        .count();

    write_response(json!({
        "records": records.len(),
        "duplicate_icaos": duplicates,
        "invalid_records": invalid,
    }))
}

fn load_config(path: Option<&Path>) -> CliResult<ServerConfig> {
    match path {
        Some(p) => Ok(ServerConfig::load(p)?),
        None => Ok(ServerConfig::default()),
    }
}

fn load_records(config: &ServerConfig) -> CliResult<Vec<Value>> {
    match &config.dataset {
        Some(path) => Ok(dataset::load_from_path(path)?),
        None => Ok(dataset::load_embedded()?),
    }
}

/// Codes appearing on more than one record, exact match, first-seen order
fn duplicate_icaos(records: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        if let Some(icao) = record.get("icao").and_then(Value::as_str) {
            if !seen.insert(icao.to_string()) && !duplicates.iter().any(|d| d == icao) {
                duplicates.push(icao.to_string());
            }
        }
    }
    duplicates
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
